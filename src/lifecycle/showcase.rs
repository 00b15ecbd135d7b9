use super::config::{Demo, DemoConfig};
use super::error::DemoError;
use crate::chain::{
    country_code, country_code_bound, country_code_flat_mapped, country_code_imperative,
    country_code_ref,
};
use crate::future::{AsyncFailure, AsyncResult};
use crate::model::{Dog, HumanPerson, LivingThing, Person};
use crate::numbers::{magic, multiply};
use crate::store::{fetch_pair, InMemoryDogStore};
use futures::stream::{FuturesUnordered, TryStreamExt};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, info_span, Instrument};

/// Owns what the demonstrations need and runs them on request.
///
/// # Example
///
/// ```
/// use idiom_recipe::lifecycle::{Demo, DemoConfig, Showcase};
///
/// # #[tokio::main]
/// # async fn main() {
/// let config = DemoConfig { demo: Demo::Arithmetic, ..DemoConfig::default() };
/// let mut out = Vec::new();
/// Showcase::new(config).run(&mut out).await.unwrap();
/// assert!(String::from_utf8(out).unwrap().starts_with("3 * 4 = 12"));
/// # }
/// ```
pub struct Showcase {
    config: DemoConfig,
    store: Arc<InMemoryDogStore>,
}

impl Showcase {
    /// Builds the showcase with a kennel holding the dogs the lookup
    /// demonstration asks for.
    pub fn new(config: DemoConfig) -> Self {
        let store = InMemoryDogStore::new()
            .with_dog("34", Dog::new("harry"))
            .with_dog("32344", Dog::new("harry"))
            .with_latency(Duration::from_millis(10));
        Self::with_store(config, Arc::new(store))
    }

    pub fn with_store(config: DemoConfig, store: Arc<InMemoryDogStore>) -> Self {
        Self { config, store }
    }

    /// Runs the configured demonstration, writing its report to `out`.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<(), DemoError> {
        for &step in steps(self.config.demo) {
            self.run_step(step, out).await?;
        }
        Ok(())
    }

    async fn run_step<W: Write>(&self, step: Step, out: &mut W) -> Result<(), DemoError> {
        let span = info_span!("demo", ?step);
        async move {
            info!("Running");
            match step {
                Step::Arithmetic => arithmetic(out)?,
                Step::Living => living(out)?,
                Step::Options => options(out)?,
                Step::Greeting => {
                    for line in delayed_greeting(self.config.delay()).await {
                        writeln!(out, "{line}")?;
                    }
                }
                Step::Sum => {
                    let sum = sum_resolved(self.config.count).await?;
                    writeln!(out, "Sum: {sum}")?;
                }
                Step::Lookup => {
                    let (first, second) = fetch_pair(Arc::clone(&self.store), "34", "32344").await?;
                    writeln!(out, "completed future dog = {}", first.name)?;
                    writeln!(out, "completed future dog = {}", second.name)?;
                }
            }
            info!("Done");
            Ok::<(), DemoError>(())
        }
        .instrument(span)
        .await
    }
}

/// A single demonstration; [`Demo`] names one or a sequence of these.
#[derive(Debug, Clone, Copy)]
enum Step {
    Arithmetic,
    Living,
    Options,
    Greeting,
    Sum,
    Lookup,
}

fn steps(demo: Demo) -> &'static [Step] {
    match demo {
        Demo::Arithmetic => &[Step::Arithmetic],
        Demo::Living => &[Step::Living],
        Demo::Options => &[Step::Options],
        Demo::Greeting => &[Step::Greeting],
        Demo::Sum => &[Step::Sum],
        Demo::Lookup => &[Step::Lookup],
        Demo::Async => &[Step::Greeting, Step::Sum, Step::Lookup],
        Demo::All => &[
            Step::Arithmetic,
            Step::Living,
            Step::Options,
            Step::Greeting,
            Step::Sum,
            Step::Lookup,
        ],
    }
}

fn arithmetic<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "3 * 4 = {}", multiply(3, 4))?;
    for input in ["34", "0", "saf"] {
        match magic(input) {
            Ok(text) => writeln!(out, "Ok({text})")?,
            Err(e) => writeln!(out, "Err({e})")?,
        }
    }
    Ok(())
}

fn living<W: Write>(out: &mut W) -> std::io::Result<()> {
    let person: LivingThing = Person::new("Bob", 23).into();
    let dog: LivingThing = Dog::new("doggy").into();
    writeln!(out, "{person}")?;
    writeln!(out, "{dog}")?;
    writeln!(out, "{}", dog.describe())?;
    writeln!(out, "{}", person.describe())?;
    writeln!(out, "{}", person.render_twice())?;
    Ok(())
}

fn options<W: Write>(out: &mut W) -> std::io::Result<()> {
    let bobby = HumanPerson::located("bobby", 3, "UK");
    let alice = HumanPerson::located("alice", 3, "UK");

    writeln!(out, "bound: {:?}", country_code_bound(Some(bobby.clone())))?;
    writeln!(out, "imperative: {:?}", country_code_imperative(Some(alice.clone())))?;
    writeln!(out, "flat_mapped: {:?}", country_code_flat_mapped(Some(alice)))?;
    writeln!(out, "borrowed: {:?}", country_code_ref(&bobby))?;
    writeln!(out, "chain: {:?}", country_code(Some(HumanPerson::new("carol", None))))?;
    Ok(())
}

/// Awaits `count` already-resolved results concurrently and sums them.
///
/// The results hold `1..=count`, so the sum is `count * (count + 1) / 2`.
pub async fn sum_resolved(count: u64) -> Result<u64, AsyncFailure> {
    let results: Vec<AsyncResult<u64, AsyncFailure>> =
        (1..=count).map(AsyncResult::resolved).collect();
    results
        .iter()
        .map(AsyncResult::wait)
        .collect::<FuturesUnordered<_>>()
        .try_fold(0, |sum, value| async move { Ok::<_, AsyncFailure>(sum + value) })
        .await
}

/// Spawns `count` tasks, each producing its own index, and sums them.
pub async fn sum_spawned(count: u64) -> Result<u64, AsyncFailure> {
    let results: Vec<AsyncResult<u64, AsyncFailure>> = (1..=count)
        .map(|n| AsyncResult::<u64, AsyncFailure>::spawn(async move { Ok(n) }))
        .collect();
    let mut sum = 0;
    for result in results {
        sum += result.await?;
    }
    Ok(sum)
}

/// A spawned task greets after `delay` while the caller waits twice as long
/// without blocking its worker, then says "Stop".
///
/// Returns the lines in the order they were produced.
pub async fn delayed_greeting(delay: Duration) -> Vec<&'static str> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let greeter = tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = greeter.send("Hello");
    });

    tokio::time::sleep(delay * 2).await;
    let _ = tx.send("Stop");
    drop(tx);

    let mut lines = Vec::new();
    while let Some(line) = rx.recv().await {
        lines.push(line);
    }
    lines
}
