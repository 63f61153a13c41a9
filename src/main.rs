use ledger_account_bridge::config::Config;
use ledger_account_bridge::indexer::FilecoinApiClient;
use ledger_account_bridge::utils::{FILECOIN_DECIMALS, format_token_amount};
use ledger_account_bridge::wallet::AccountSyncService;

use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
		)
		.with_target(false)
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_file(false)
		.with_line_number(false)
		.with_timer(tracing_subscriber::fmt::time::time())
		.init();

	let config = match Config::from_env() {
		Ok(config) => config,
		Err(e) => {
			error!("Invalid configuration: {}", e);
			return ExitCode::FAILURE;
		}
	};

	let client = match FilecoinApiClient::new(&config.api_endpoint) {
		Ok(client) => client,
		Err(e) => {
			error!("Failed to create indexer client: {}", e);
			return ExitCode::FAILURE;
		}
	};
	info!("Created indexer client for {}", config.api_endpoint);

	let sync_service = AccountSyncService::new(client, config.currency_id.clone());

	let shape = match sync_service.get_account_shape(&config.address).await {
		Ok(shape) => shape,
		Err(e) => {
			error!("Failed to sync account {}: {}", config.address, e);
			return ExitCode::FAILURE;
		}
	};

	info!("Account {} at block {}", shape.id, shape.block_height);
	info!(
		"Balance: {} FIL ({} FIL spendable)",
		format_token_amount(shape.balance, FILECOIN_DECIMALS),
		format_token_amount(shape.spendable_balance, FILECOIN_DECIMALS),
	);

	for op in &shape.operations {
		info!(
			"{} {} {} FIL (fee {} FIL) {} -> {} at {}",
			op.date.to_rfc3339(),
			op.operation_type,
			format_token_amount(op.value, FILECOIN_DECIMALS),
			format_token_amount(op.fee, FILECOIN_DECIMALS),
			op.senders.join(","),
			op.recipients.join(","),
			op.block_height.unwrap_or_default(),
		);
	}

	ExitCode::SUCCESS
}
