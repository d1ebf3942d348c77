pub mod initialize;
pub mod do_swap;
pub mod set_migration_bonus;
pub mod close_migration;
pub mod fund_refund_pool;
pub mod transfer_ownership;
pub mod migration_status;

pub use initialize::*;
pub use do_swap::*;
pub use set_migration_bonus::*;
pub use close_migration::*;
pub use fund_refund_pool::*;
pub use transfer_ownership::*;
pub use migration_status::*;
