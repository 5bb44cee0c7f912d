//! JSON wire form for statements.
//!
//! Every node encodes its attributes through the same token table the
//! diagnostics use. Violations travel as their rendered strings, keyed by
//! argument index when the violation is tied to one; decoding therefore
//! rebuilds attributes and structure exactly but not the violation values
//! themselves.

use serde_json::{json, Map, Value};

use crate::dcp::{Curvature, Monotonicity, Sign};
use crate::error::{DcpError, Result};
use crate::expr::{Constraint, ConstraintKind, Expression};
use crate::parser::Statement;

const TYPE_KEY: &str = "type";
const EXPRESSION_TYPE: &str = "Expression";
const CONSTRAINT_TYPE: &str = "Constraint";

const NAME_KEY: &str = "name";
const SHORT_NAME_KEY: &str = "short_name";
const CURVATURE_KEY: &str = "curvature";
const SIGN_KEY: &str = "sign";
const CLASS_KEY: &str = "class";
const CHILDREN_KEY: &str = "children";
const MONOTONICITY_KEY: &str = "monotonicity";
const ERRORS_KEY: &str = "errors";
const UNSORTED_ERRORS_KEY: &str = "unsorted_errors";
const INDEXED_ERRORS_KEY: &str = "indexed_errors";

/// Encode a statement.
pub fn encode_statement(statement: &Statement) -> Value {
    match statement {
        Statement::Expression(exp) => encode_expression(exp),
        Statement::Constraint(constraint) => encode_constraint(constraint),
    }
}

/// Encode an expression tree.
pub fn encode_expression(exp: &Expression) -> Value {
    let mut map = Map::new();
    map.insert(TYPE_KEY.into(), json!(EXPRESSION_TYPE));
    map.insert(NAME_KEY.into(), json!(exp.name()));
    map.insert(SHORT_NAME_KEY.into(), json!(exp.short_name()));
    map.insert(CURVATURE_KEY.into(), json!(exp.curvature().name()));
    map.insert(SIGN_KEY.into(), json!(exp.sign().name()));
    map.insert(ERRORS_KEY.into(), encode_errors(exp.errors()));
    map.insert(
        CHILDREN_KEY.into(),
        Value::Array(exp.children().iter().map(encode_expression).collect()),
    );
    if let Some(monos) = exp.monotonicity() {
        map.insert(
            MONOTONICITY_KEY.into(),
            Value::Array(monos.iter().map(|m| json!(m.name())).collect()),
        );
    }
    Value::Object(map)
}

/// Encode a constraint with its two sides as children.
pub fn encode_constraint(constraint: &Constraint) -> Value {
    let mut map = Map::new();
    map.insert(TYPE_KEY.into(), json!(CONSTRAINT_TYPE));
    map.insert(NAME_KEY.into(), json!(constraint.name()));
    map.insert(SHORT_NAME_KEY.into(), json!(constraint.short_name()));
    map.insert(CLASS_KEY.into(), json!(constraint.kind().class_name()));
    map.insert(ERRORS_KEY.into(), encode_errors(constraint.errors()));
    map.insert(
        CHILDREN_KEY.into(),
        Value::Array(vec![
            encode_expression(constraint.lhs()),
            encode_expression(constraint.rhs()),
        ]),
    );
    Value::Object(map)
}

fn encode_errors(errors: &[crate::diagnostics::Violation]) -> Value {
    let mut unsorted = Vec::new();
    let mut indexed = Map::new();
    for error in errors {
        match error.index() {
            Some(index) => {
                indexed.insert(index.to_string(), json!(error.to_string()));
            }
            None => unsorted.push(json!(error.to_string())),
        }
    }
    json!({
        UNSORTED_ERRORS_KEY: unsorted,
        INDEXED_ERRORS_KEY: indexed,
    })
}

/// Decode a statement from its wire form.
pub fn decode_statement(value: &Value) -> Result<Statement> {
    match str_field(value, TYPE_KEY)? {
        EXPRESSION_TYPE => Ok(Statement::Expression(decode_expression(value)?)),
        CONSTRAINT_TYPE => Ok(Statement::Constraint(decode_constraint(value)?)),
        other => Err(DcpError::MalformedJson(format!(
            "unknown statement type {}",
            other
        ))),
    }
}

/// Decode a statement from JSON text.
pub fn statement_from_str(text: &str) -> Result<Statement> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| DcpError::MalformedJson(e.to_string()))?;
    decode_statement(&value)
}

/// Decode an expression node. Violations are not reconstructed; they remain
/// available only in the document's error strings.
pub fn decode_expression(value: &Value) -> Result<Expression> {
    let name = str_field(value, NAME_KEY)?.to_string();
    let short_name = str_field(value, SHORT_NAME_KEY)?.to_string();
    let curvature_token = str_field(value, CURVATURE_KEY)?;
    let curvature = Curvature::from_name(curvature_token)
        .ok_or_else(|| DcpError::MalformedJson(format!("unknown curvature {}", curvature_token)))?;
    let sign_token = str_field(value, SIGN_KEY)?;
    let sign = Sign::from_name(sign_token)
        .ok_or_else(|| DcpError::UnknownSign(sign_token.to_string()))?;

    let mut children = Vec::new();
    if let Some(child_values) = value.get(CHILDREN_KEY).and_then(Value::as_array) {
        for child in child_values {
            children.push(decode_expression(child)?);
        }
    }

    let monotonicity = match value.get(MONOTONICITY_KEY).and_then(Value::as_array) {
        Some(tokens) => {
            let mut monos = Vec::with_capacity(tokens.len());
            for token in tokens {
                let token = token.as_str().ok_or_else(|| {
                    DcpError::MalformedJson("monotonicity entries must be strings".to_string())
                })?;
                let mono = Monotonicity::from_name(token).ok_or_else(|| {
                    DcpError::MalformedJson(format!("unknown monotonicity {}", token))
                })?;
                monos.push(mono);
            }
            Some(monos)
        }
        None => None,
    };

    Ok(Expression::from_wire(
        curvature,
        sign,
        name,
        short_name,
        children,
        monotonicity,
    ))
}

/// Decode a constraint. The relation is recovered from the short name and
/// the curvature check re-runs, so a violating constraint decodes as
/// violating again.
pub fn decode_constraint(value: &Value) -> Result<Constraint> {
    let symbol = str_field(value, SHORT_NAME_KEY)?;
    let kind = ConstraintKind::from_symbol(symbol)
        .ok_or_else(|| DcpError::MalformedJson(format!("unknown constraint {}", symbol)))?;
    let children = value
        .get(CHILDREN_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| DcpError::MalformedJson("constraint children missing".to_string()))?;
    if children.len() != 2 {
        return Err(DcpError::MalformedJson(
            "constraint must have exactly two children".to_string(),
        ));
    }
    let lhs = decode_expression(&children[0])?;
    let rhs = decode_expression(&children[1])?;
    Ok(Constraint::new(kind, lhs, rhs))
}

fn str_field<'a>(value: &'a Value, key: &str) -> Result<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| DcpError::MalformedJson(format!("missing key {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::{self, AtomArg, AtomKind};

    #[test]
    fn test_expression_round_trip() {
        let conc = Expression::new(Curvature::Concave, Sign::Unknown, "conc_exp");
        let cvx = Expression::new(Curvature::Convex, Sign::Unknown, "convex_exp");
        let exp = atoms::apply(
            AtomKind::Square,
            "square",
            vec![AtomArg::Expr(conc.add(cvx))],
        )
        .unwrap();

        let value = encode_expression(&exp);
        let decoded = decode_expression(&value).unwrap();
        assert_eq!(decoded.name(), exp.name());
        assert_eq!(decoded.short_name(), exp.short_name());
        assert_eq!(decoded.curvature(), exp.curvature());
        assert_eq!(decoded.sign(), exp.sign());
        assert_eq!(decoded.monotonicity(), exp.monotonicity());
        assert_eq!(decoded.children().len(), 1);
        assert_eq!(decoded.children()[0].name(), exp.children()[0].name());

        // The composition violation travels as an indexed rendered string.
        let indexed = &value[ERRORS_KEY][INDEXED_ERRORS_KEY];
        assert_eq!(indexed["0"], json!(exp.errors()[0].to_string()));
    }

    #[test]
    fn test_constraint_round_trip() {
        let conc = Expression::new(Curvature::Concave, Sign::Unknown, "conc_exp");
        let noncvx = Expression::new(Curvature::Nonconvex, Sign::Unknown, "noncvx_exp");
        let constraint = conc.leq(noncvx);

        let value = encode_constraint(&constraint);
        assert_eq!(value[TYPE_KEY], json!("Constraint"));
        assert_eq!(value[CLASS_KEY], json!("leq"));

        let decoded = decode_constraint(&value).unwrap();
        assert_eq!(decoded.name(), constraint.name());
        assert_eq!(decoded.short_name(), constraint.short_name());
        assert_eq!(decoded.lhs().name(), constraint.lhs().name());
        assert_eq!(decoded.rhs().name(), constraint.rhs().name());
        // Validation re-runs on decode.
        assert_eq!(decoded.errors(), constraint.errors());

        let unsorted = &value[ERRORS_KEY][UNSORTED_ERRORS_KEY];
        assert_eq!(unsorted[0], json!(constraint.errors()[0].to_string()));
    }

    #[test]
    fn test_statement_from_str_rejects_garbage() {
        assert!(matches!(
            statement_from_str("not json"),
            Err(DcpError::MalformedJson(_))
        ));
        assert!(matches!(
            statement_from_str("{\"type\": \"Problem\"}"),
            Err(DcpError::MalformedJson(_))
        ));
    }
}
