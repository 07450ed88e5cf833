pub mod basis;
pub mod intent;
pub mod session;
pub mod shaping;
