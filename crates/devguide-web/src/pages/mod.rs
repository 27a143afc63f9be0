mod guide;

pub use guide::GuidePage;
