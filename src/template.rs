//! Template engine binding for lookup plugins
//!
//! Exposes the Jinja2/Ansible `lookup()` and `query()` functions on a
//! minijinja [`Environment`]:
//!
//! ```jinja
//! {{ lookup('file', 'motd.txt') }}            {# one string, values joined by "," #}
//! {% for key in query('file', 'a.pub', 'b.pub') %}{{ key }}{% endfor %}
//! ```
//!
//! Every term is looked up on its own, so `query('file', 'a', 'b')` reads two
//! files and yields two values.

use crate::lookup::{LookupContext, LookupError, LookupRegistry, Terms};
use indexmap::IndexMap;
use minijinja::value::Rest;
use minijinja::{Environment, Error, ErrorKind};
use std::sync::Arc;

fn to_template_error(err: LookupError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string()).with_source(err)
}

fn run_each(
    registry: &LookupRegistry,
    context: &LookupContext,
    name: &str,
    terms: &[String],
) -> Result<Vec<String>, Error> {
    if terms.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("lookup '{}' requires at least one term", name),
        ));
    }

    let mut values = Vec::with_capacity(terms.len());
    for term in terms {
        let found = registry
            .lookup(name, &Terms::Single(term.clone()), context)
            .map_err(to_template_error)?;
        values.extend(found);
    }
    Ok(values)
}

/// Install `lookup` and `query` as global functions on `env`
pub fn register_lookup_functions(
    env: &mut Environment<'_>,
    registry: Arc<LookupRegistry>,
    context: Arc<LookupContext>,
) {
    let (query_registry, query_context) = (Arc::clone(&registry), Arc::clone(&context));
    env.add_function(
        "query",
        move |name: String, terms: Rest<String>| -> Result<Vec<String>, Error> {
            run_each(&query_registry, &query_context, &name, &terms)
        },
    );

    env.add_function(
        "lookup",
        move |name: String, terms: Rest<String>| -> Result<String, Error> {
            Ok(run_each(&registry, &context, &name, &terms)?.join(","))
        },
    );
}

/// Render `template` once with lookups available.
///
/// `vars` are exposed to the template and recorded in the lookup context.
pub fn render_with_lookups(
    template: &str,
    vars: &IndexMap<String, serde_json::Value>,
    registry: Arc<LookupRegistry>,
    context: LookupContext,
) -> Result<String, Error> {
    let context = context.with_vars(vars.clone());
    let mut env = Environment::new();
    register_lookup_functions(&mut env, registry, Arc::new(context));
    env.render_str(template, vars)
}
