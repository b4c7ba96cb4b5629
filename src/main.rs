//! hantype - 두벌식 한영 키 변환 CLI

use clap::Parser;
use hantype::{load_config, Conversion, Converter};
use std::io::{self, BufRead, Write};

/// 두벌식 영문 키 <-> 한글 변환
#[derive(Parser, Debug)]
#[command(name = "hantype", version)]
struct Args {
    /// 입력/출력 바이트 수를 표준 에러로 출력
    #[arg(short = 'v', long)]
    bytes: bool,

    /// 변환할 텍스트 (없으면 표준 입력을 한 줄씩 변환)
    text: Vec<String>,
}

fn print_conversion(out: &mut impl Write, conversion: &Conversion, show_bytes: bool) -> io::Result<()> {
    writeln!(out, "{}", conversion.output)?;
    if show_bytes {
        eprintln!(
            "{} Bytes -> {} Bytes",
            conversion.input_bytes, conversion.output_bytes
        );
    }
    Ok(())
}

fn run(args: Args) -> io::Result<()> {
    let config = load_config();
    log::debug!("설정: {:?}", config);
    let converter = Converter::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.text.is_empty() {
        let conversion = converter.convert_detailed(&args.text.join(" "));
        return print_conversion(&mut out, &conversion, args.bytes);
    }

    for line in io::stdin().lock().lines() {
        let conversion = converter.convert_detailed(&line?);
        print_conversion(&mut out, &conversion, args.bytes)?;
    }
    Ok(())
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("입출력 실패: {}", e);
        std::process::exit(1);
    }
}
