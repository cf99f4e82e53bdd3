pub mod frontend;
pub mod redirect;
pub mod shorten;

pub use frontend::FrontendService;
pub use redirect::RedirectService;
pub use shorten::ShortenService;
