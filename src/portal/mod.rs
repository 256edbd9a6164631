pub mod dispatcher;
pub mod harness;

pub use dispatcher::Portal;
pub use harness::TestPortal;
