pub type Integer = i64;
pub type Text = String;
