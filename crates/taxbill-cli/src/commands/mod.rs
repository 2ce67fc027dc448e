pub mod bill;
pub mod discount;
pub mod fine;
pub mod tax;
