use cpf_check::app::handler;
use cpf_check::core::checker::CpfChecker;
use cpf_check::utils::{logger, validation::Validate};
use cpf_check::{LambdaConfig, ValidationResult};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;

async fn function_handler(
    checker: &CpfChecker,
    event: LambdaEvent<serde_json::Value>,
) -> Result<ValidationResult, Error> {
    tracing::info!(request_id = %event.context.request_id, "Starting CPF validation Lambda");

    let body = serde_json::to_vec(&event.payload)?;
    let result = handler::evaluate(checker, &body)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    tracing::info!("CPF validation Lambda completed");
    Ok(result)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;
    let checker = Arc::new(config.check.build_checker()?);

    run(service_fn(move |event| {
        let checker = Arc::clone(&checker);
        async move { function_handler(&checker, event).await }
    }))
    .await
}
