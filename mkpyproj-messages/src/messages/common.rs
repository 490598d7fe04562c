//! Common/shared messages

pub struct CommonMessages {
    pub error_generic: &'static str,
    pub error_hint: &'static str,
}

pub const COMMON_MESSAGES: CommonMessages = CommonMessages {
    error_generic: "❌ Error: {error}",
    error_hint: "💡 {hint}",
};
