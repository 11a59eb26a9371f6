use crate::io::ext_repr::{ExtInstance, ExtSolution};
use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use std::fmt::Write;
use std::str::FromStr;

/// Parses an instance in the plain-text challenge format:
///
/// ```text
/// <n_orders> <n_items> <n_aisles>
/// <k> <item> <units> ... (k pairs)   one line per order
/// <k> <item> <units> ... (k pairs)   one line per aisle
/// <wave_size_lb> <wave_size_ub>
/// ```
pub fn parse_instance(text: &str) -> Result<ExtInstance> {
    let mut tokens = Tokens::new(text);

    let n_orders: usize = tokens.next("number of orders")?;
    let n_items: usize = tokens.next("number of items")?;
    let n_aisles: usize = tokens.next("number of aisles")?;

    let orders = (0..n_orders)
        .map(|o| tokens.item_qtys(n_items).with_context(|| format!("in order {o}")))
        .collect::<Result<Vec<_>>>()?;
    let aisles = (0..n_aisles)
        .map(|a| tokens.item_qtys(n_items).with_context(|| format!("in aisle {a}")))
        .collect::<Result<Vec<_>>>()?;

    let wave_size_lb: u32 = tokens.next("wave size lower bound")?;
    let wave_size_ub: u32 = tokens.next("wave size upper bound")?;

    if let Some(extra) = tokens.remaining() {
        bail!("unexpected trailing token {extra:?} after the wave size bounds");
    }

    Ok(ExtInstance {
        orders,
        aisles,
        n_items,
        wave_size_lb,
        wave_size_ub,
    })
}

/// Writes a wave in the challenge output format: the number of selected orders followed by
/// one order id per line, then the number of visited aisles followed by one aisle id per line.
pub fn write_solution(solution: &ExtSolution) -> String {
    let mut out = String::new();
    for ids in [&solution.orders, &solution.aisles] {
        let _ = writeln!(out, "{}", ids.len());
        for id in ids.iter().sorted() {
            let _ = writeln!(out, "{id}");
        }
    }
    out
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        self.position += 1;
        let token = self
            .inner
            .next()
            .with_context(|| format!("unexpected end of input, expected {what}"))?;
        token
            .parse()
            .ok()
            .with_context(|| format!("token {} ({token:?}) is not a valid {what}", self.position))
    }

    fn item_qtys(&mut self, n_items: usize) -> Result<Vec<(usize, u32)>> {
        let k: usize = self.next("number of item entries")?;
        (0..k)
            .map(|_| {
                let item: usize = self.next("item id")?;
                let qty: u32 = self.next("quantity")?;
                ensure!(item < n_items, "item id {item} out of range [0, {n_items})");
                ensure!(qty > 0, "item {item} has a zero quantity");
                Ok((item, qty))
            })
            .collect()
    }

    fn remaining(&mut self) -> Option<&'a str> {
        self.inner.next()
    }
}
