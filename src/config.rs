use regex::Regex;

use crate::filter::Filter;
use crate::key::Key;
use crate::order::Order;

#[derive(Clone, Debug)]
pub(crate) struct Config {
    field_separator: char,
    ignore_lines: Option<Regex>,
    filter: Filter,
    key: Key,
    order: Order,
    limit: Option<i64>,
}

impl Config {
    pub(crate) fn new(
        field_separator: char,
        ignore_lines: Option<Regex>,
        filter: Filter,
        key: Key,
        order: Order,
        limit: Option<i64>,
    ) -> Config {
        Config {
            field_separator,
            ignore_lines,
            filter,
            key,
            order,
            limit,
        }
    }

    pub(crate) fn field_separator(&self) -> char {
        self.field_separator
    }

    pub(crate) fn ignore_lines(&self) -> &Option<Regex> {
        &self.ignore_lines
    }

    pub(crate) fn filter(&self) -> &Filter {
        &self.filter
    }

    pub(crate) fn key(&self) -> &Key {
        &self.key
    }

    pub(crate) fn order(&self) -> &Order {
        &self.order
    }

    pub(crate) fn limit(&self) -> Option<i64> {
        self.limit
    }
}
