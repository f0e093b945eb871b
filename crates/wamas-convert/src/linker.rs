//! Record linking.
//!
//! Rebuilds the relational structure the flat telegram stream lost:
//! order heads gain a `lines` list, and pickings additionally attach
//! the transport-unit record to each line as `package` and collect the
//! distinct package ids on the order. Data-quality problems follow one
//! policy throughout: duplicates keep the first occurrence, orphans are
//! dropped, both with a warning.

use tracing::warn;
use wamas_record::{Record, Value};

/// Field a picking line is matched to its order on.
pub const PICKING_ORDER_KEY: &str = "IvAusk_AusId_AusNr";
/// Field a picking line carries its order id in.
pub const PICKING_LINE_ORDER_KEY: &str = "IvTep_AusId_AusNr";
/// Field a transport unit is identified by.
pub const PICKING_PACKAGE_KEY: &str = "IvTek_TeId";
/// Field a picking line carries its transport-unit id in.
pub const PICKING_LINE_PACKAGE_KEY: &str = "IvTep_TeId";

/// Index parents by key, first occurrence of a key wins.
fn index_parents<'a>(
    parents: &'a [Record],
    parent_key: &str,
) -> Vec<(&'a str, Record)> {
    let mut indexed: Vec<(&str, Record)> = Vec::with_capacity(parents.len());
    for parent in parents {
        let key = parent.get_str(parent_key).unwrap_or_default();
        if indexed.iter().any(|(k, _)| *k == key) {
            warn!(key, "duplicate parent record discarded");
            continue;
        }
        indexed.push((key, parent.clone()));
    }
    indexed
}

/// Join line records onto their parent orders (two-level linking, used
/// for receptions and returns). Parents come back in input order, each
/// carrying its `lines` list; orphan lines are dropped.
pub fn link_order_lines(
    parents: &[Record],
    children: &[Record],
    parent_key: &str,
    child_key: &str,
) -> Vec<Record> {
    let mut indexed = index_parents(parents, parent_key);

    for child in children {
        let key = child.get_str(child_key).unwrap_or_default();
        match indexed.iter_mut().find(|(k, _)| *k == key) {
            Some((_, parent)) => push_line(parent, child.clone()),
            None => warn!(key, "orphan line record dropped, no matching order"),
        }
    }

    indexed.into_iter().map(|(_, parent)| parent).collect()
}

/// Join picking lines onto their orders and transport units
/// (three-level linking). Every line gains a `package` entry when its
/// transport-unit id resolves; the order collects the distinct package
/// ids in first-seen order. A line with an unknown package id is kept,
/// a line with an unknown order id is dropped.
pub fn link_picking(
    orders: &[Record],
    packages: &[Record],
    lines: &[Record],
) -> Vec<Record> {
    let mut indexed = index_parents(orders, PICKING_ORDER_KEY);
    let packages = index_parents(packages, PICKING_PACKAGE_KEY);

    for line in lines {
        let order_id = line.get_str(PICKING_LINE_ORDER_KEY).unwrap_or_default();
        let Some((_, order)) = indexed.iter_mut().find(|(k, _)| *k == order_id) else {
            warn!(key = order_id, "orphan line record dropped, no matching order");
            continue;
        };

        let mut line = line.clone();
        let package_id = line
            .get_str(PICKING_LINE_PACKAGE_KEY)
            .unwrap_or_default()
            .to_owned();
        match packages.iter().find(|(k, _)| *k == package_id) {
            Some((_, package)) => {
                line.insert("package", package.clone());
                push_package_id(order, &package_id);
            }
            None => warn!(key = package_id, "line references an unknown package"),
        }
        push_line(order, line);
    }

    indexed.into_iter().map(|(_, order)| order).collect()
}

fn push_line(parent: &mut Record, line: Record) {
    match parent.get_mut("lines") {
        Some(Value::List(lines)) => lines.push(line.into()),
        _ => parent.insert("lines", Value::List(vec![line.into()])),
    }
}

fn push_package_id(order: &mut Record, package_id: &str) {
    match order.get_mut("package_ids") {
        Some(Value::List(ids)) => {
            if !ids.iter().any(|id| id.as_text() == Some(package_id)) {
                ids.push(package_id.into());
            }
        }
        _ => order.insert("package_ids", Value::List(vec![package_id.into()])),
    }
}
