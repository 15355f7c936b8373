use mimic_base::{init_stdout_logger, log_fatal};
use mimic_game::{play, FrameReport, JsonLinesSource, Session};
use pose_match::{format_frame, format_summary, load_config, parse_args};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    let args: Vec<String> = std::env::args().collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(usage) => log_fatal!("{}", usage),
    };
    let config = load_config(&args)?;

    let mut session = Session::new(config)?;
    session.begin_loading()?;
    log::info!("reference: {}", args.reference.display());
    log::info!("candidate: {}", args.candidate.display());
    let mut reference = JsonLinesSource::open(&args.reference).await?;
    let mut candidate = JsonLinesSource::open(&args.candidate).await?;
    session.mark_ready()?;

    session.start()?;
    let summary = play(&mut session, &mut reference, &mut candidate, |report: &FrameReport| {
        log::info!("{}", format_frame(report))
    })
    .await?;

    println!("{}", format_summary(&summary));
    Ok(())
}
