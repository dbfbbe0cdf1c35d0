// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! rule {
    // Horizontal rule for the console report. Default: 100 × '='
    () => {
        $crate::rule!('=')
    };
    ($ch:expr) => {
        $crate::rule!($ch, 100)
    };
    ($ch:expr, $len:expr) => {
        ::std::iter::repeat($ch).take($len).collect::<::std::string::String>()
    };
}
