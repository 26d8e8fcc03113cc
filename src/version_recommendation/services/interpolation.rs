use std::collections::HashMap;

/// Upper bound on fixpoint passes when property values themselves contain
/// tokens. Stops self-referential property chains from looping.
const MAX_INTERPOLATION_PASSES: usize = 10;

/// Resolves `${name}` tokens against ordered value sources.
///
/// Lookup order, first source that defines the name wins:
/// 1. built-in self-referential model fields (`project.*`, legacy `pom.*`
///    and bare `version`/`groupId`/`artifactId`),
/// 2. the merged property table from the model/ancestor chain,
/// 3. environment variables (`env.NAME`, with a plain-name fallback),
/// 4. build-level project properties supplied by the caller.
///
/// An unresolved token is left verbatim, not an error, to preserve
/// legacy/irregular descriptors.
pub struct Interpolator<'a> {
    model_fields: HashMap<&'static str, &'a str>,
    properties: &'a HashMap<String, String>,
    project_properties: &'a HashMap<String, String>,
}

impl<'a> Interpolator<'a> {
    pub fn new(
        group: &'a str,
        artifact: &'a str,
        version: &'a str,
        properties: &'a HashMap<String, String>,
        project_properties: &'a HashMap<String, String>,
    ) -> Self {
        let mut model_fields = HashMap::new();
        model_fields.insert("project.groupId", group);
        model_fields.insert("project.artifactId", artifact);
        model_fields.insert("project.version", version);
        // Deprecated spellings still found in the wild.
        model_fields.insert("pom.groupId", group);
        model_fields.insert("pom.artifactId", artifact);
        model_fields.insert("pom.version", version);
        model_fields.insert("groupId", group);
        model_fields.insert("artifactId", artifact);
        model_fields.insert("version", version);
        Self {
            model_fields,
            properties,
            project_properties,
        }
    }

    /// Interpolates every `${name}` token in the input, repeating until no
    /// further substitution applies (bounded by [`MAX_INTERPOLATION_PASSES`]).
    pub fn interpolate(&self, input: &str) -> String {
        let mut current = input.to_string();
        for _ in 0..MAX_INTERPOLATION_PASSES {
            let next = self.interpolate_once(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    fn interpolate_once(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(start) = rest.find("${") {
            output.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            match after_open.find('}') {
                Some(close) => {
                    let name = &after_open[..close];
                    match self.resolve(name) {
                        Some(value) => output.push_str(&value),
                        // Unresolved: keep the token verbatim.
                        None => output.push_str(&rest[start..start + 2 + close + 1]),
                    }
                    rest = &rest[start + 2 + close + 1..];
                }
                None => {
                    // Unterminated token: keep the remainder as-is.
                    output.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        output.push_str(rest);
        output
    }

    fn resolve(&self, name: &str) -> Option<String> {
        if let Some(value) = self.model_fields.get(name) {
            return Some((*value).to_string());
        }
        if let Some(value) = self.properties.get(name) {
            return Some(value.clone());
        }
        if let Some(value) = resolve_environment(name) {
            return Some(value);
        }
        self.project_properties.get(name).cloned()
    }
}

fn resolve_environment(name: &str) -> Option<String> {
    if let Some(variable) = name.strip_prefix("env.") {
        return std::env::var(variable).ok();
    }
    std::env::var(name).ok()
}
