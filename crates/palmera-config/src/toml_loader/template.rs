//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Palmera Configuration
# Only override what you want to change -- missing fields use defaults.

[backend]
# Base URL of the resort backend. The chat endpoint lives at
# {base_url}/api/chat/message.
base_url = "http://localhost:8080"
# connect_timeout_secs = 10
# request_timeout_secs = 120

[chat]
# greeting = "Hello! I am your resort booking assistant. When do you want to stay?"
"##
    .to_string()
}
