use anyhow::Result;
use clap::Parser;
use logdrip::{sink, Args, Emitter};
use tokio_util::sync::CancellationToken;

async fn cancel_on_ctrl_c(cancel: CancellationToken) {
	match tokio::signal::ctrl_c().await {
		Ok(()) => cancel.cancel(),
		Err(err) => log::error!("failed to listen for ctrl-c: {}", err),
	}
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
	let args = Args::parse();
	let config = args.emitter_config()?;
	sink::init()?;

	let cancel = CancellationToken::new();
	tokio::spawn(cancel_on_ctrl_c(cancel.clone()));

	let mut emitter = Emitter::new(args.draw(), log::logger(), config);
	emitter.run(cancel).await;

	Ok(())
}
