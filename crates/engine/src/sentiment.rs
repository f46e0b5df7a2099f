//! Score-based admission control.

use std::str::FromStr;
use std::sync::Arc;
use swapwatch_core::SentimentResult;
use swapwatch_feeds::{Classifier, ClassifyError};
use tracing::warn;

/// What to do when the classifier call fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassifierFailurePolicy {
    /// Abort the run; the error surfaces as the run's outcome.
    Fail,
    /// Substitute a fixed score and continue through the gate.
    DefaultScore(f64),
}

impl FromStr for ClassifierFailurePolicy {
    type Err = String;

    /// Accepts `fail` or `default-score:<value>` with value in `[0.0, 1.0]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("fail") {
            return Ok(ClassifierFailurePolicy::Fail);
        }
        if let Some(raw) = s.strip_prefix("default-score:") {
            let score: f64 = raw
                .parse()
                .map_err(|_| format!("invalid default score: {raw}"))?;
            if !(0.0..=1.0).contains(&score) {
                return Err(format!("default score {score} outside [0.0, 1.0]"));
            }
            return Ok(ClassifierFailurePolicy::DefaultScore(score));
        }
        Err(format!("unknown classifier failure policy: {s}"))
    }
}

/// Result of evaluating the gate for one event.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Pass(SentimentResult),
    Drop(SentimentResult),
}

/// Invokes the classifier and applies the admission threshold.
pub struct SentimentGate {
    classifier: Arc<dyn Classifier>,
    threshold: f64,
    failure_policy: ClassifierFailurePolicy,
}

impl SentimentGate {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        threshold: f64,
        failure_policy: ClassifierFailurePolicy,
    ) -> Self {
        Self {
            classifier,
            threshold,
            failure_policy,
        }
    }

    /// Score the text and apply the threshold. A score exactly at the
    /// threshold passes.
    pub async fn evaluate(&self, text: &str) -> Result<GateDecision, ClassifyError> {
        let result = match self.classifier.score(text).await {
            Ok(result) => result,
            Err(err) => match self.failure_policy {
                ClassifierFailurePolicy::Fail => return Err(err),
                ClassifierFailurePolicy::DefaultScore(score) => {
                    warn!(error = %err, score, "Classifier failed, using default score");
                    SentimentResult::new("NEUTRAL", score)
                }
            },
        };

        if result.score >= self.threshold {
            Ok(GateDecision::Pass(result))
        } else {
            Ok(GateDecision::Drop(result))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubClassifier {
        score: f64,
        fail: bool,
    }

    #[async_trait]
    impl Classifier for StubClassifier {
        async fn score(&self, _text: &str) -> Result<SentimentResult, ClassifyError> {
            if self.fail {
                return Err(ClassifyError::Status(503));
            }
            Ok(SentimentResult::new("POSITIVE", self.score))
        }
    }

    fn gate(score: f64, fail: bool, policy: ClassifierFailurePolicy) -> SentimentGate {
        SentimentGate::new(Arc::new(StubClassifier { score, fail }), 0.7, policy)
    }

    #[tokio::test]
    async fn test_threshold_boundary() {
        let pass = gate(0.70, false, ClassifierFailurePolicy::Fail);
        assert!(matches!(
            pass.evaluate("t").await.unwrap(),
            GateDecision::Pass(_)
        ));

        let drop = gate(0.699, false, ClassifierFailurePolicy::Fail);
        assert!(matches!(
            drop.evaluate("t").await.unwrap(),
            GateDecision::Drop(_)
        ));

        let max = gate(1.0, false, ClassifierFailurePolicy::Fail);
        assert!(matches!(
            max.evaluate("t").await.unwrap(),
            GateDecision::Pass(_)
        ));
    }

    #[tokio::test]
    async fn test_failure_policy_fail_aborts() {
        let gate = gate(0.9, true, ClassifierFailurePolicy::Fail);
        assert!(matches!(
            gate.evaluate("t").await,
            Err(ClassifyError::Status(503))
        ));
    }

    #[tokio::test]
    async fn test_failure_policy_default_score_continues() {
        let passing = gate(0.0, true, ClassifierFailurePolicy::DefaultScore(0.9));
        match passing.evaluate("t").await.unwrap() {
            GateDecision::Pass(result) => {
                assert_eq!(result.score, 0.9);
                assert_eq!(result.label, "NEUTRAL");
            }
            other => panic!("expected pass, got {other:?}"),
        }

        let dropping = gate(0.0, true, ClassifierFailurePolicy::DefaultScore(0.5));
        assert!(matches!(
            dropping.evaluate("t").await.unwrap(),
            GateDecision::Drop(_)
        ));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "fail".parse::<ClassifierFailurePolicy>().unwrap(),
            ClassifierFailurePolicy::Fail
        );
        assert_eq!(
            "default-score:0.5"
                .parse::<ClassifierFailurePolicy>()
                .unwrap(),
            ClassifierFailurePolicy::DefaultScore(0.5)
        );
        assert!("default-score:1.5"
            .parse::<ClassifierFailurePolicy>()
            .is_err());
        assert!("retry".parse::<ClassifierFailurePolicy>().is_err());
    }
}
