pub mod sort;
pub mod walk;
