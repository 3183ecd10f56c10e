pub(crate) fn default_reserved_rows() -> u16 {
    4
}

pub(crate) fn default_page_padding() -> u16 {
    6
}

pub(crate) fn default_margin_top() -> u16 {
    2
}

pub(crate) fn default_margin_left() -> u16 {
    3
}

pub(crate) fn default_gutter() -> u16 {
    6
}

pub(crate) fn default_show_status() -> bool {
    true
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}

pub(crate) fn default_key_next_spread() -> String {
    "right".to_string()
}

pub(crate) fn default_key_previous_spread() -> String {
    "left".to_string()
}

pub(crate) fn default_key_jump_end() -> String {
    "end".to_string()
}

pub(crate) fn default_key_jump_start() -> String {
    "home".to_string()
}
