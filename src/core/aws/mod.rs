pub mod region;
pub mod session;

pub use region::AwsRegion;
pub use session::AwsSession;
