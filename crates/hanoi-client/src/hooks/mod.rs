mod use_querystring;

pub use use_querystring::use_querystring;
