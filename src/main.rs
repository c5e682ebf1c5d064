// ==========================================
// 导师结对分配系统 - 命令行入口
// ==========================================
// 用法: mentor-pairing <输入文件.json> [--seed N]
// 输出: 追加新一期后的完整名册 (stdout);错误走 stderr 并以非零码退出
// ==========================================

use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use mentor_pairing::api::PairingApi;
use mentor_pairing::config::PairingParameters;
use mentor_pairing::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    let (input_path, seed) = parse_args()?;

    let params = PairingParameters {
        seed,
        ..PairingParameters::default()
    };

    let api = PairingApi::new(params);
    let book = api
        .generate_and_append(Path::new(&input_path))
        .with_context(|| format!("处理输入失败: {}", input_path))?;

    // 计算全部完成后才写 stdout,致命错误不产生部分输出
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    api.write_book(&book, &mut handle)?;
    writeln!(handle)?;

    Ok(())
}

/// 解析命令行参数
///
/// # 返回
/// (输入文件路径, 可选随机种子)
fn parse_args() -> anyhow::Result<(String, Option<u64>)> {
    let mut input_path: Option<String> = None;
    let mut seed: Option<u64> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or_else(|| anyhow!("--seed 需要一个数值参数"))?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|_| anyhow!("--seed 参数无法解析为整数: {}", value))?,
                );
            }
            flag if flag.starts_with("--") => bail!("未知参数: {}", flag),
            _ if input_path.is_none() => input_path = Some(arg),
            _ => bail!("多余的参数: {}", arg),
        }
    }

    let input_path =
        input_path.ok_or_else(|| anyhow!("用法: mentor-pairing <输入文件.json> [--seed N]"))?;
    Ok((input_path, seed))
}
