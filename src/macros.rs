// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression (literal, const, var)
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! css {
    // Selector shorthand; bails out of the enclosing fn with ScrapeError::Selector.
    ($sel:expr) => {
        ::scraper::Selector::parse($sel).map_err($crate::error::ScrapeError::from)?
    };
}
