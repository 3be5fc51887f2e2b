pub mod completion;
pub mod lint;
