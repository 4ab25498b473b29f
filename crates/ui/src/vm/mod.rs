mod comment_vm;
mod time_fmt;

pub use comment_vm::{CommentVm, map_comment_cards};
pub use time_fmt::format_comment_date;
