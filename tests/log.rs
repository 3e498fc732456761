use drone_esp32_map::log::{self, Port, PORTS_COUNT, STDERR_PORT, STDOUT_PORT};
use drone_esp32_map::{eprintln, print, println};

#[test]
fn standard_ports() {
    assert_eq!(log::stdout().number(), STDOUT_PORT);
    assert_eq!(log::stderr().number(), STDERR_PORT);
    assert_eq!(log::stdout().is_enabled(), cfg!(feature = "std"));
    assert!(!Port::new(PORTS_COUNT - 1).is_enabled());
}

#[test]
#[should_panic]
fn port_out_of_range() {
    let _ = Port::new(PORTS_COUNT);
}

#[test]
fn macros() {
    print!("GPIO ");
    println!("base {:#010X}", 0x6000_4000);
    println!();
    eprintln!("{} violations", 0);
    log::write_str(5, "ignored");
}
