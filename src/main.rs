// ==========================================
// 天然气供应链 - 演示入口
// ==========================================
// 仅调用公开 API 并格式化输出到 stdout
// 环境变量: GAS_CHAIN_PROFILE (标准链配置), RUST_LOG (日志级别)
// ==========================================

use anyhow::{Context, Result};
use chrono::NaiveDate;
use gas_supply_chain::{
    logging, process_period, ChainFactory, DailyGasRecord, Producer, Receiver, Stage,
    StandardChainProfile, TransactionChain, Transporter,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn main() -> Result<()> {
    logging::init();

    tracing::info!("天然气供应链模型 v{}", gas_supply_chain::VERSION);

    let profile = StandardChainProfile::from_env().context("加载标准链配置失败")?;

    run_basic_report(&profile)?;
    run_custom_chain_report()?;
    run_weekly_report()?;

    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("无效日期: {}-{}-{}", year, month, day))
}

fn print_stages(chain: &TransactionChain) {
    for (i, description) in chain.describe_stages().iter().enumerate() {
        println!("  {}. {}", i + 1, description);
    }
    println!();
}

// ==========================================
// 标准链逐步报表
// ==========================================
fn run_basic_report(profile: &StandardChainProfile) -> Result<()> {
    println!("=== BASIC EXAMPLE: STANDARD GAS CHAIN ===\n");

    let initial = DailyGasRecord::new(date(2024, 1, 15)?, dec!(500000), dec!(3.50));

    println!("Requested gas:");
    println!("  Date: {}", initial.date);
    println!("  Quantity: {} MCF", initial.quantity_mcf);
    println!("  Price: ${} per MCF", initial.price_per_mcf);
    println!("  Total value: ${:.2}\n", initial.total_value());

    let chain = ChainFactory::build_from_profile(profile, None, None);

    println!("Chain stages:");
    print_stages(&chain);

    println!("Step-by-step results:");
    for (record, description) in chain.process(&initial).iter().zip(chain.describe_stages()) {
        println!("  After {}:", description);
        println!("    Quantity: {:.0} MCF", record.quantity_mcf);
        println!("    Price: ${:.2} per MCF", record.price_per_mcf);
        println!("    Value: ${:.2}", record.total_value());
        println!();
    }

    if let Some(report) = chain.compute_efficiency(&initial)? {
        println!("=== EFFICIENCY SUMMARY ===");
        println!("Quantity efficiency: {:.1}%", report.quantity_efficiency_pct);
        println!("Price increase: {:.1}%", report.price_increase_pct);
        println!("Initial value: ${:.2}", report.initial_total_value);
        println!("Final value: ${:.2}", report.final_total_value);
    }

    Ok(())
}

// ==========================================
// 自定义链报表
// ==========================================
fn run_custom_chain_report() -> Result<()> {
    println!("\n\n=== CUSTOM CHAIN EXAMPLE ===\n");

    let producer = Producer::new("Chevron", "Louisiana", dec!(750000));
    let pipelines = [
        Transporter::new("Kinder Morgan", "Louisiana-Texas-Border", dec!(0.025), dec!(0.75)),
        Transporter::new("Sistrangas", "Border-Bajio", dec!(0.015), dec!(0.40)),
    ];
    let receiver = Receiver::new("CFE Salamanca", "Guanajuato", dec!(600000));

    println!("Stage parameters:");
    println!(
        "  Producer {} ({}): capacity {} MCF/day",
        producer.name(),
        producer.location(),
        producer.daily_capacity_mcf()
    );
    for pipeline in &pipelines {
        println!(
            "  Transport {} [{}]: loss {}%, cost ${}/MCF",
            pipeline.name(),
            pipeline.route(),
            pipeline.loss_factor() * Decimal::ONE_HUNDRED,
            pipeline.cost_per_mcf()
        );
    }
    println!(
        "  Receiver {} ({}): demand {} MCF/day\n",
        receiver.name(),
        receiver.location(),
        receiver.daily_demand_mcf()
    );

    let mut chain = TransactionChain::new();
    chain.append(producer);
    for pipeline in pipelines {
        chain.append(pipeline);
    }
    chain.append(receiver);

    let request = DailyGasRecord::new(date(2024, 2, 1)?, dec!(700000), dec!(3.25));

    println!("Gas request:");
    println!("  Quantity: {} MCF", request.quantity_mcf);
    println!("  Initial price: ${} per MCF\n", request.price_per_mcf);

    println!("Custom chain:");
    print_stages(&chain);

    let trace = chain.process(&request);
    let delivered = trace.last().context("自定义链没有环节")?;

    println!("Final result:");
    println!("  Delivered gas: {:.0} MCF", delivered.quantity_mcf);
    println!("  Final price: ${:.2} per MCF", delivered.price_per_mcf);
    println!("  Total cost: ${:.2}", delivered.total_value());

    if let Some(report) = chain.compute_efficiency(&request)? {
        println!("  Efficiency: {:.1}%", report.quantity_efficiency_pct);
    }

    Ok(())
}

// ==========================================
// 一周逐日报表
// ==========================================
fn run_weekly_report() -> Result<()> {
    println!("\n\n=== EXAMPLE: MULTI-DAY PROCESSING ===\n");

    let chain = ChainFactory::build_standard_chain(Some("Shell"), Some("CFE Manzanillo"));

    let quantities = [
        dec!(450000),
        dec!(520000),
        dec!(480000),
        dec!(610000),
        dec!(590000),
        dec!(380000),
        dec!(420000),
    ];
    let prices = [
        dec!(3.40),
        dec!(3.45),
        dec!(3.38),
        dec!(3.52),
        dec!(3.48),
        dec!(3.42),
        dec!(3.39),
    ];

    let requests = quantities
        .iter()
        .zip(prices.iter())
        .enumerate()
        .map(|(i, (quantity, price))| -> Result<DailyGasRecord> {
            Ok(DailyGasRecord::new(date(2024, 3, i as u32 + 1)?, *quantity, *price))
        })
        .collect::<Result<Vec<_>>>()?;

    let summary = process_period(&chain, &requests)?;

    println!("Weekly processing:");
    println!("Day      | Requested  | Delivered  | Final Price | Efficiency");
    println!("{}", "-".repeat(65));

    for day in &summary.days {
        println!(
            "{}    | {:>10} | {:>10.0} | ${:>9.2}  | {:>6.1}%",
            day.date.format("%m/%d"),
            day.requested_mcf,
            day.delivered_mcf,
            day.final_price_per_mcf,
            day.efficiency_pct
        );
    }

    println!("{}", "-".repeat(65));
    println!(
        "TOTAL    | {:>10} | {:>10.0} | {:>10}  | {:>6.1}%",
        summary.total_requested_mcf,
        summary.total_delivered_mcf,
        "",
        summary.overall_efficiency_pct.unwrap_or(Decimal::ZERO)
    );

    Ok(())
}
