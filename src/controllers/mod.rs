pub mod alert;
pub mod dropdown;
pub mod nav;
