use hms_form_rules::cli::{self, Command};
use hms_form_rules::AppConfig;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

fn main() -> ExitCode {
    // 加载配置 (失败时使用默认值)
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    // 初始化日志 - 本地时间格式, 输出到 stderr 以免混入报告
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    let command = match Command::parse(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    info!("Running {:?}", command);

    let mut stdout = std::io::stdout().lock();
    match cli::run(&command, &config, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
