pub(crate) use allocator_api2::alloc::Allocator;
pub(crate) use allocator_api2::vec::Vec;
pub(crate) use core::alloc::Layout;
pub(crate) use core::cmp::max;
pub(crate) use core::cmp::min;
pub(crate) use core::fmt;
pub(crate) use core::iter::FusedIterator;
