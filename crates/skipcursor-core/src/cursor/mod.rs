//! Skiptoken cursors: parsing untrusted tokens, validating them against a
//! resolved ordering, locating the resume point, and issuing the next token.

mod error;
mod page;
mod position;
mod token;
mod validate;


pub use error::{CursorError, CursorErrorKind};
pub use page::{Page, PageRequest, paginate};
pub use position::{PositionDescriptor, build_next_page_token};
pub use token::{
    LITERAL_SEPARATOR, SkipTokenValue, SkipTokenValues, TokenSyntaxError, parse_skiptoken,
};
pub use validate::{validate_arity, validate_types};
