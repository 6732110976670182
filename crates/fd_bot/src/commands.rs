use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "greet and explain what this bot does")]
    Start,
    #[command(description = "fetch and send the digest now")]
    Digest,
}

pub const GREETING: &str =
    "Hello! I'm your news digest bot. I deliver a daily digest of fresh articles \
     from your feeds, sorted by topic. Send /digest to get one right away.";

pub const NOTHING_NEW: &str = "Nothing new since the last digest.";

pub const DIGEST_FAILED: &str = "Something went wrong while building the digest.";
