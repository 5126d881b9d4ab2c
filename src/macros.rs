// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Compile a CSS selector once per call site and hand out a `&'static Selector`.
/// `$css` must be a const or literal (it is evaluated inside a `static`).
///
/// A bad selector surfaces as `ScrapeError::Pattern` on every use instead of panicking.
#[macro_export]
macro_rules! selector {
    ($css:expr) => {{
        static SEL: ::std::sync::LazyLock<
            ::std::result::Result<::scraper::Selector, ::std::string::String>,
        > = ::std::sync::LazyLock::new(|| {
            ::scraper::Selector::parse($css).map_err(|e| format!("`{}`: {}", $css, e))
        });
        SEL.as_ref()
            .map_err(|e| $crate::error::ScrapeError::Pattern(e.clone()))
    }};
}
