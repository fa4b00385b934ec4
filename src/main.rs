use advocate_directory::adapters::source_from_config;
use advocate_directory::app::render::{render, render_options, render_ranges};
use advocate_directory::utils::error::{DirectoryError, ErrorSeverity};
use advocate_directory::utils::{logger, validation::Validate};
use advocate_directory::{run_interactive, CliConfig, Directory, Settings};
use clap::Parser;

fn exit_code(e: &DirectoryError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: DirectoryError) -> ! {
    tracing::error!("❌ {} (Category: {:?}, Severity: {:?})", e, e.category(), e.severity());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(exit_code(&e).max(1));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting advocate-directory");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if cli.ranges {
        print!("{}", render_ranges());
        return Ok(());
    }

    // 合併並驗證配置
    let settings = match Settings::resolve(&cli).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };
    let source = match source_from_config(&settings) {
        Ok(source) => source,
        Err(e) => fail(e),
    };

    let mut directory = Directory::new(source).with_state(settings.initial_state());
    directory.load().await;

    if cli.interactive {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        run_interactive(&mut directory, stdin, &mut stdout, settings.format).await?;
    } else {
        if let Some(message) = directory.error_message() {
            eprintln!("❌ {}", message);
        }
        if cli.options {
            print!("{}", render_options(directory.filter_options()));
        } else {
            let refined = directory.refined();
            tracing::info!(
                "📋 {} of {} advocates match",
                refined.len(),
                directory.records().len()
            );
            print!("{}", render(settings.format, &refined)?);
        }
    }

    // 來源失敗不會中斷輸出，但以非零代碼結束
    if let Some(e) = directory.last_error() {
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        let code = exit_code(e);
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}
