mod common;

use std::collections::{HashMap, HashSet};

use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};
use estacionamento_generate::{
    FactOptions, GenerationError, generate_fact_script, write_fact_script,
};
use estacionamento_store::queries::{count_rows, list_ids};
use estacionamento_store::{SqliteConnection, audit_store, load_script, split_statements};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;

use common::{reference_store, seeded_store, small_seed, temp_path};

const TUPLE_PATTERN: &str =
    r"^\((\d+), (\d+), (\d+), (\d+\.\d{2}), '(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})'\)[,;]?$";

fn fixed_end() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 12, 31).and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn fact_options(count: u64) -> FactOptions {
    FactOptions {
        count,
        end: fixed_end(),
        ..FactOptions::default()
    }
}

async fn render(conn: &mut SqliteConnection, seed: u64, options: &FactOptions) -> Result<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = Vec::new();
    write_fact_script(conn, &mut rng, options, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

fn tuple_lines(script: &str) -> Vec<&str> {
    script.lines().filter(|line| line.starts_with('(')).collect()
}

#[tokio::test]
async fn three_facts_make_one_statement() -> Result<()> {
    let mut conn = seeded_store(1, &small_seed()).await?;
    let script = render(&mut conn, 1, &fact_options(3)).await?;

    assert_eq!(script.matches("INSERT INTO ticket").count(), 1);
    assert!(script.starts_with(
        "INSERT INTO ticket (id_veiculo, id_tipo, id_praca, valor, data_hora) VALUES\n"
    ));
    assert_eq!(tuple_lines(&script).len(), 3);
    assert!(script.ends_with(");\n\n"));
    assert_eq!(split_statements(&script).len(), 1);
    Ok(())
}

#[tokio::test]
async fn batches_flush_at_the_batch_size() -> Result<()> {
    let mut conn = seeded_store(2, &small_seed()).await?;
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut out = Vec::new();
    let options = FactOptions {
        count: 2_500,
        ..fact_options(0)
    };

    let report = write_fact_script(&mut conn, &mut rng, &options, &mut out).await?;
    let script = String::from_utf8(out)?;

    assert_eq!(report.facts, 2_500);
    assert_eq!(report.batches, 3);
    assert_eq!(report.bytes_written, script.len() as u64);
    assert_eq!(script.matches("INSERT INTO ticket").count(), 3);
    assert_eq!(tuple_lines(&script).len(), 2_500);

    let sizes: Vec<usize> = split_statements(&script)
        .iter()
        .map(|statement| tuple_lines(statement).len())
        .collect();
    assert_eq!(sizes, vec![1_000, 1_000, 500]);
    Ok(())
}

#[tokio::test]
async fn facts_reference_seeded_rows_and_current_prices() -> Result<()> {
    let mut conn = seeded_store(3, &small_seed()).await?;
    let script = render(&mut conn, 3, &fact_options(400)).await?;

    let vehicles: HashSet<i64> = list_ids(&mut conn, "veiculo").await?.into_iter().collect();
    let lots: HashSet<i64> = list_ids(&mut conn, "praca").await?.into_iter().collect();
    let prices: HashMap<i64, f64> = sqlx::query_as::<_, (i64, f64)>("select id, valor from tipo")
        .fetch_all(&mut conn)
        .await?
        .into_iter()
        .collect();

    let pattern = Regex::new(TUPLE_PATTERN)?;
    let start = FactOptions::default().start;
    let end = fixed_end().ok_or_else(|| anyhow!("invalid end date"))?;

    for line in tuple_lines(&script) {
        let caps = pattern
            .captures(line)
            .ok_or_else(|| anyhow!("malformed tuple: {line}"))?;
        let vehicle: i64 = caps[1].parse()?;
        let ticket_type: i64 = caps[2].parse()?;
        let lot: i64 = caps[3].parse()?;
        let issued_at = NaiveDateTime::parse_from_str(&caps[5], "%Y-%m-%d %H:%M:%S")?;

        assert!(vehicles.contains(&vehicle), "unknown vehicle {vehicle}");
        assert!(lots.contains(&lot), "unknown lot {lot}");
        let price = prices
            .get(&ticket_type)
            .ok_or_else(|| anyhow!("unknown type {ticket_type}"))?;
        assert_eq!(&caps[4], format!("{price:.2}"));
        assert!(issued_at >= start && issued_at < end, "{issued_at} out of range");
    }
    Ok(())
}

#[tokio::test]
async fn same_seed_same_script() -> Result<()> {
    let mut conn = seeded_store(4, &small_seed()).await?;
    let first = render(&mut conn, 99, &fact_options(50)).await?;
    let second = render(&mut conn, 99, &fact_options(50)).await?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn replaying_the_script_inserts_every_ticket() -> Result<()> {
    let mut conn = seeded_store(6, &small_seed()).await?;
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let options = FactOptions {
        out_path: temp_path("replay"),
        ..fact_options(1_234)
    };

    let report = generate_fact_script(&mut conn, &mut rng, &options).await?;
    assert_eq!(report.batches, 2);
    assert_eq!(
        report.out_path.as_deref(),
        Some(options.out_path.display().to_string().as_str())
    );

    let replay = load_script(&mut conn, &options.out_path).await?;
    assert_eq!(replay.statements, 2);
    assert_eq!(count_rows(&mut conn, "ticket").await?, 1_234);

    let audit = audit_store(&mut conn).await?;
    assert!(audit.is_consistent(), "audit failed: {audit:?}");

    std::fs::remove_file(&options.out_path)?;
    Ok(())
}

#[tokio::test]
async fn zero_facts_write_nothing() -> Result<()> {
    let mut conn = reference_store().await?;
    let script = render(&mut conn, 1, &fact_options(0)).await?;
    assert!(script.is_empty());
    Ok(())
}

#[tokio::test]
async fn rejected_options_leave_the_previous_script_alone() -> Result<()> {
    let mut conn = seeded_store(5, &small_seed()).await?;
    let path = temp_path("rejected");
    let previous = "INSERT INTO ticket VALUES (1);\n";
    std::fs::write(&path, previous)?;

    let options = FactOptions {
        batch_size: 0,
        out_path: path.clone(),
        ..fact_options(10)
    };
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let result = generate_fact_script(&mut conn, &mut rng, &options).await;
    assert!(matches!(result, Err(GenerationError::InvalidOptions(_))));

    let after = std::fs::read_to_string(&path)?;
    std::fs::remove_file(&path)?;
    assert_eq!(after, previous);
    Ok(())
}

#[tokio::test]
async fn facts_need_seeded_parents() -> Result<()> {
    let mut conn = reference_store().await?;
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut out = Vec::new();

    let result = write_fact_script(&mut conn, &mut rng, &fact_options(1), &mut out).await;
    assert!(matches!(result, Err(GenerationError::NoParentRows("veiculo"))));
    Ok(())
}
