mod arena;
mod balance;
mod handle;
mod node;
mod path;
mod raw_wbt;
mod size;

pub(crate) use handle::Handle;
pub(crate) use node::Link;
pub(crate) use raw_wbt::RawWbt;
