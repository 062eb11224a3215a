use pest::{Parser, iterators::Pair};
use pest_derive::Parser;

use crate::ast::Segment;

#[derive(Parser)]
#[grammar = "src/template.pest"]
pub struct TemplateParser;

impl TemplateParser {
    /// Split a `<token>` template into segments
    pub fn parse_tokens(input: &str) -> Result<Vec<Segment<'_>>, pest::error::Error<Rule>> {
        Self::parse_template(Rule::token_template, input)
    }

    /// Split a `{variable}` template into segments
    pub fn parse_variables(input: &str) -> Result<Vec<Segment<'_>>, pest::error::Error<Rule>> {
        Self::parse_template(Rule::variable_template, input)
    }

    fn parse_template(
        rule: Rule,
        input: &str,
    ) -> Result<Vec<Segment<'_>>, pest::error::Error<Rule>> {
        let segments = TemplateParser::parse(rule, input)?
            .flat_map(|template| template.into_inner())
            .filter_map(Self::parse_segment)
            .collect();
        Ok(segments)
    }

    fn parse_segment(pair: Pair<'_, Rule>) -> Option<Segment<'_>> {
        match pair.as_rule() {
            Rule::token | Rule::variable => Self::placeholder_name(pair).map(Segment::Placeholder),
            Rule::token_literal | Rule::variable_literal => Some(Segment::Literal(pair.as_str())),
            _ => None,
        }
    }

    fn placeholder_name(pair: Pair<'_, Rule>) -> Option<&str> {
        pair.into_inner()
            .find(|p| p.as_rule() == Rule::name)
            .map(|p| p.as_str())
    }
}
