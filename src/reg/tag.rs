use core::marker::PhantomData;

/// Register token tag.
pub trait RegTag: Sized + Default {}

/// Owned register tag. Tokens with this tag can change their tag.
pub trait RegOwned: RegTag {}

/// Shared register tag. Tokens with this tag can be used from several
/// execution contexts at once.
pub trait RegShared: RegTag {}

/// Unsynchronized register tag.
///
/// A token with this tag is the only way to reach the register, so a
/// read-modify-write sequence through it can't race with another one.
#[derive(Default)]
pub struct Urt(PhantomData<*const ()>);

impl RegTag for Urt {}
impl RegOwned for Urt {}

/// Synchronized register tag.
#[derive(Default)]
pub struct Srt;

impl RegTag for Srt {}
impl RegOwned for Srt {}
impl RegShared for Srt {}

/// Copyable register tag.
#[derive(Clone, Copy, Default)]
pub struct Crt;

impl RegTag for Crt {}
impl RegShared for Crt {}
