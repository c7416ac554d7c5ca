pub mod extract;
pub mod naming;
