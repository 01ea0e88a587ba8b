// Shared prompt constants. Feature prompts live next to their feature
// (see generation/prompts.rs).

/// Prompt used by the model health probe.
pub const SMOKE_TEST_PROMPT: &str = "Say hello";
