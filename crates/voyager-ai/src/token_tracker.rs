//! Token usage tracking for a chat session.

use crate::TokenUsage;

/// Tracks cumulative token usage across API calls.
pub struct TokenTracker {
    total: TokenUsage,
    /// Number of API calls made.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self {
            total: TokenUsage::default(),
            call_count: 0,
        }
    }

    /// Record token usage from an API call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.total.cached_tokens = self.total.cached_tokens.saturating_add(usage.cached_tokens);
        self.call_count += 1;
    }

    /// Get total token usage.
    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    /// Get total tokens (input + output).
    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    /// Get number of API calls.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

}

impl Default for TokenTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_usage_and_calls() {
        let mut tracker = TokenTracker::new();
        tracker.record(&TokenUsage {
            input_tokens: 100,
            output_tokens: 20,
            cached_tokens: 80,
        });
        tracker.record(&TokenUsage {
            input_tokens: 50,
            output_tokens: 10,
            cached_tokens: 0,
        });

        assert_eq!(tracker.call_count(), 2);
        assert_eq!(tracker.total().input_tokens, 150);
        assert_eq!(tracker.total().cached_tokens, 80);
        assert_eq!(tracker.total_tokens(), 180);
    }
}
