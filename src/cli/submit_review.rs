//! Posts a trucker review from a JSON draft file.

use std::io::{self, Write};

use carrier_board::api::{BoardError, CompanyGateway, ReviewGateway};
use carrier_board::submission::{ReviewDraft, ReviewSubmitter, SubmissionGate};
use carrier_board::telemetry::TelemetrySink;
use carrier_board::CarrierBoardConfig;

use super::output::write_submitted_review;
use super::{build_gateway, read_draft, telemetry_sink};

/// Submits the review in the configured draft file.
///
/// # Errors
///
/// Returns [`BoardError::AccessDenied`] unless the viewer is a trucker,
/// [`BoardError::Validation`] for an incomplete draft, and any gateway error
/// from the POST.
pub async fn run(config: &CarrierBoardConfig) -> Result<(), BoardError> {
    let gateway = build_gateway(config)?;
    let telemetry = telemetry_sink(config);
    let mut stdout = io::stdout().lock();
    run_with_gateway(config, &gateway, telemetry.as_ref(), &mut stdout).await
}

/// Submits the configured draft using the provided gateway.
///
/// This function is exposed for testing with stub gateways.
pub async fn run_with_gateway<G, W>(
    config: &CarrierBoardConfig,
    gateway: &G,
    telemetry: &dyn TelemetrySink,
    writer: &mut W,
) -> Result<(), BoardError>
where
    G: CompanyGateway + ReviewGateway,
    W: Write,
{
    let access = config.access_context()?;
    let draft: ReviewDraft = read_draft(&config.require_draft_path()?)?;
    let gate = SubmissionGate::new();

    let submitted = ReviewSubmitter::new(gateway, gateway, &access, &gate, telemetry)
        .submit(&draft)
        .await?;
    write_submitted_review(writer, &submitted)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use carrier_board::api::BoardError;
    use carrier_board::telemetry::{SubmissionKind, TelemetryEvent};
    use carrier_board::CarrierBoardConfig;
    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::run_with_gateway;
    use crate::cli::test_utils::{RecordingSink, StubGateway, company};

    fn draft_file(draft: &serde_json::Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file should be created");
        write!(file, "{draft}").expect("draft should be written");
        file
    }

    fn config_for(viewer: &str, draft: &NamedTempFile) -> CarrierBoardConfig {
        CarrierBoardConfig {
            submit_review: true,
            viewer: Some(viewer.to_owned()),
            draft: Some(draft.path().display().to_string()),
            ..Default::default()
        }
    }

    fn gateway() -> StubGateway {
        StubGateway::with_snapshot(
            vec![company("company-1", "C.H. Robinson Worldwide", 3.0, 4)],
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn trucker_review_is_posted_and_company_refreshed() {
        let draft = draft_file(&json!({
            "company_id": "company-1",
            "overall_rating": 2,
            "title": "  Rate changed after delivery ",
            "content": "Agreed on $2000, they paid $1600.",
            "payment_rating": 1,
            "payment_speed": "late",
            "issues_reported": ["rate_changed"]
        }));
        let gateway = gateway();
        let sink = RecordingSink::default();
        let mut buffer = Vec::new();

        run_with_gateway(&config_for("trucker", &draft), &gateway, &sink, &mut buffer)
            .await
            .expect("submission should succeed");

        let submitted = gateway
            .submitted
            .lock()
            .expect("submitted mutex should be available")
            .clone();
        assert_eq!(submitted.len(), 1);
        assert_eq!(
            submitted.first().map(|review| review.title.as_str()),
            Some("Rate changed after delivery")
        );
        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert!(output.starts_with("Review submitted: Rate changed after delivery (2/5)\n"));
        assert!(output.contains("C.H. Robinson Worldwide"));
        assert!(sink.take().contains(&TelemetryEvent::SubmissionCompleted {
            kind: SubmissionKind::Review,
            company_id: "company-1".to_owned(),
        }));
    }

    #[tokio::test]
    async fn missing_rating_never_reaches_backend() {
        let draft = draft_file(&json!({
            "company_id": "company-1",
            "title": "Fine",
            "content": "Fine."
        }));
        let gateway = gateway();
        let mut buffer = Vec::new();

        let result = run_with_gateway(
            &config_for("trucker", &draft),
            &gateway,
            &RecordingSink::default(),
            &mut buffer,
        )
        .await;

        match result {
            Err(error @ BoardError::Validation { .. }) => {
                assert_eq!(error.user_message(), "Please select an overall rating");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(
            gateway
                .submitted
                .lock()
                .expect("submitted mutex should be available")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn company_viewer_cannot_rate() {
        let draft = draft_file(&json!({
            "company_id": "company-1",
            "overall_rating": 5,
            "title": "Great",
            "content": "Great broker."
        }));
        let mut buffer = Vec::new();

        let result = run_with_gateway(
            &config_for("company", &draft),
            &gateway(),
            &RecordingSink::default(),
            &mut buffer,
        )
        .await;

        assert!(matches!(result, Err(BoardError::AccessDenied { .. })));
    }

    #[tokio::test]
    async fn missing_draft_file_is_io_error() {
        let config = CarrierBoardConfig {
            submit_review: true,
            viewer: Some("trucker".to_owned()),
            draft: Some("/nonexistent/carrier-board/draft.json".to_owned()),
            ..Default::default()
        };
        let mut buffer = Vec::new();

        let result = run_with_gateway(
            &config,
            &gateway(),
            &RecordingSink::default(),
            &mut buffer,
        )
        .await;

        assert!(matches!(result, Err(BoardError::Io { .. })));
    }
}
