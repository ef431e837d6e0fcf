use ferrous_doh_application::ports::QuestionHandler;
use ferrous_doh_application::use_cases::{ChainHandler, ForwardingHandler, LocalRecordsHandler};
use ferrous_doh_domain::config::LocalRecordConfig;
use ferrous_doh_domain::Config;
use ferrous_doh_infrastructure::doh::DohClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Local records first, then the upstream server if one is configured.
pub fn build_question_handler(config: &Config) -> anyhow::Result<Arc<dyn QuestionHandler>> {
    let mut chain = ChainHandler::new();

    if !config.local_records.is_empty() {
        let local = LocalRecordsHandler::new(
            config
                .local_records
                .iter()
                .map(LocalRecordConfig::to_record),
        );
        info!(records = local.len(), "Loaded local records");
        chain = chain.with(Arc::new(local));
    }

    if let Some(client) = upstream_client(config)? {
        chain = chain.with(Arc::new(ForwardingHandler::new(Arc::new(client))));
    }

    if chain.is_empty() {
        warn!("No local records and no upstream configured, every question will get SERVFAIL");
    }

    Ok(Arc::new(chain))
}

/// Plain HTTP to the upstream is governed by `upstream_allow_http` alone,
/// independent of what the endpoint accepts from its own clients.
fn upstream_client(config: &Config) -> anyhow::Result<Option<DohClient>> {
    let Some(upstream) = &config.server.upstream else {
        return Ok(None);
    };

    let addr =
        Url::parse(upstream).map_err(|e| anyhow::anyhow!("invalid upstream {}: {}", upstream, e))?;
    let http = DohClient::http_client(Duration::from_secs(config.client.timeout))?;

    info!(upstream = %upstream, "Forwarding questions upstream");
    Ok(Some(
        DohClient::new(Some(addr), http).with_allow_http(config.server.upstream_allow_http),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_doh_domain::{ClientError, Question, RecordType, ReturnCode};

    #[tokio::test]
    async fn test_local_records_are_served() {
        let config = Config::from_toml(
            r#"
            [[local_records]]
            name = "router.lan"
            data = "192.168.1.1"
            "#,
        )
        .unwrap();

        let handler = build_question_handler(&config).unwrap();
        let answer = handler
            .resolve(&Question::new("router.lan.", RecordType::A))
            .await
            .unwrap();
        assert_eq!(answer.status, ReturnCode::SUCCESS);
        assert_eq!(answer.answer[0].data, "192.168.1.1");
    }

    #[tokio::test]
    async fn test_empty_configuration_has_no_answer() {
        let handler = build_question_handler(&Config::default()).unwrap();
        assert!(handler
            .resolve(&Question::new("example.org.", RecordType::A))
            .await
            .is_none());
    }

    #[test]
    fn test_invalid_upstream_is_rejected() {
        let mut config = Config::default();
        config.server.upstream = Some("not a url".to_string());
        assert!(build_question_handler(&config).is_err());
    }

    #[tokio::test]
    async fn test_plain_http_upstream_needs_its_own_opt_in() {
        let mut config = Config::default();
        config.server.upstream = Some("http://127.0.0.1:1/resolve".to_string());
        config.server.allow_http = true;
        config.client.allow_http = true;

        let client = upstream_client(&config).unwrap().unwrap();
        let exchange = client
            .query(&Question::new("example.org.", RecordType::A))
            .await;
        assert!(matches!(exchange.result, Err(ClientError::HttpsRequired)));

        config.server.upstream_allow_http = true;
        let client = upstream_client(&config).unwrap().unwrap();
        let exchange = client
            .query(&Question::new("example.org.", RecordType::A))
            .await;
        assert!(!matches!(exchange.result, Err(ClientError::HttpsRequired)));
    }

    #[test]
    fn test_no_upstream_configured() {
        assert!(upstream_client(&Config::default()).unwrap().is_none());
    }
}
