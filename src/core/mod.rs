pub mod extenso;
pub mod server;
pub mod speller;
