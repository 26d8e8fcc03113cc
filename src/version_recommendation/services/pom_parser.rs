use crate::shared::Result;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;

/// Raw parent reference as declared in a descriptor. Segments are validated
/// when the reference is resolved, not at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentRef {
    pub group: Option<String>,
    pub artifact: Option<String>,
    pub version: Option<String>,
}

/// Raw dependency-management entry, before inheritance and interpolation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawManagedDependency {
    pub group: Option<String>,
    pub artifact: Option<String>,
    pub version: Option<String>,
    pub scope: Option<String>,
    pub dep_type: Option<String>,
}

impl RawManagedDependency {
    /// An import entry splices another BOM's management section into this
    /// descriptor (`scope=import`, `type=pom`).
    pub fn is_import(&self) -> bool {
        self.scope.as_deref() == Some("import") && self.dep_type.as_deref() == Some("pom")
    }
}

/// Remote repository reference declared by a descriptor. Parsed for
/// completeness but never acted on: ancestor resolution goes through the
/// pre-established dependency-resolution collaborator only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryRef {
    pub id: Option<String>,
    pub url: Option<String>,
}

/// One descriptor's declared content: coordinate fields, optional parent
/// reference, packaging, properties, raw dependency-management entries, and
/// repository references.
#[derive(Debug, Clone, Default)]
pub struct RawModel {
    pub group: Option<String>,
    pub artifact: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub parent: Option<ParentRef>,
    pub properties: HashMap<String, String>,
    pub managed: Vec<RawManagedDependency>,
    pub repositories: Vec<RepositoryRef>,
}

/// Parses raw descriptor XML into a [`RawModel`].
///
/// Only the subset needed for dependency-management extraction is read;
/// unknown elements are walked over without error. Malformed XML fails the
/// parse.
pub fn parse(content: &str) -> Result<RawModel> {
    let mut reader = Reader::from_str(content);
    let mut model = RawModel::default();
    let mut path: Vec<String> = Vec::new();
    let mut current_dependency: Option<RawManagedDependency> = None;
    let mut current_repository: Option<RepositoryRef> = None;

    loop {
        match reader.read_event() {
            Err(error) => {
                anyhow::bail!(
                    "XML parse error at position {}: {}",
                    reader.buffer_position(),
                    error
                );
            }
            Ok(Event::Eof) => break,
            Ok(Event::Start(element)) => {
                let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                path.push(name);
                match path_of(&path).as_slice() {
                    ["project", "parent"] => model.parent = Some(ParentRef::default()),
                    ["project", "dependencyManagement", "dependencies", "dependency"] => {
                        current_dependency = Some(RawManagedDependency::default());
                    }
                    ["project", "repositories", "repository"] => {
                        current_repository = Some(RepositoryRef::default());
                    }
                    _ => {}
                }
            }
            Ok(Event::End(_)) => {
                match path_of(&path).as_slice() {
                    ["project", "dependencyManagement", "dependencies", "dependency"] => {
                        if let Some(dependency) = current_dependency.take() {
                            model.managed.push(dependency);
                        }
                    }
                    ["project", "repositories", "repository"] => {
                        if let Some(repository) = current_repository.take() {
                            model.repositories.push(repository);
                        }
                    }
                    _ => {}
                }
                path.pop();
            }
            Ok(Event::Empty(_)) => {
                // Self-closing element: no text to capture.
            }
            Ok(Event::Text(text)) => {
                let text = match text.unescape() {
                    Ok(text) => text,
                    Err(error) => anyhow::bail!("XML text decode error: {}", error),
                };
                capture(
                    &mut model,
                    &path,
                    text.trim(),
                    &mut current_dependency,
                    &mut current_repository,
                );
            }
            Ok(Event::CData(data)) => {
                let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                capture(
                    &mut model,
                    &path,
                    text.trim(),
                    &mut current_dependency,
                    &mut current_repository,
                );
            }
            Ok(_) => {}
        }
    }

    Ok(model)
}

fn path_of(path: &[String]) -> Vec<&str> {
    path.iter().map(String::as_str).collect()
}

fn capture(
    model: &mut RawModel,
    path: &[String],
    text: &str,
    current_dependency: &mut Option<RawManagedDependency>,
    current_repository: &mut Option<RepositoryRef>,
) {
    if text.is_empty() {
        return;
    }
    match path_of(path).as_slice() {
        ["project", "groupId"] => append(&mut model.group, text),
        ["project", "artifactId"] => append(&mut model.artifact, text),
        ["project", "version"] => append(&mut model.version, text),
        ["project", "packaging"] => append(&mut model.packaging, text),
        ["project", "parent", field] => {
            if let Some(parent) = model.parent.as_mut() {
                match *field {
                    "groupId" => append(&mut parent.group, text),
                    "artifactId" => append(&mut parent.artifact, text),
                    "version" => append(&mut parent.version, text),
                    _ => {}
                }
            }
        }
        ["project", "properties", name] => {
            model
                .properties
                .entry((*name).to_string())
                .or_default()
                .push_str(text);
        }
        ["project", "dependencyManagement", "dependencies", "dependency", field] => {
            if let Some(dependency) = current_dependency.as_mut() {
                match *field {
                    "groupId" => append(&mut dependency.group, text),
                    "artifactId" => append(&mut dependency.artifact, text),
                    "version" => append(&mut dependency.version, text),
                    "scope" => append(&mut dependency.scope, text),
                    "type" => append(&mut dependency.dep_type, text),
                    _ => {}
                }
            }
        }
        ["project", "repositories", "repository", field] => {
            if let Some(repository) = current_repository.as_mut() {
                match *field {
                    "id" => append(&mut repository.id, text),
                    "url" => append(&mut repository.url, text),
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

// Text for one element can arrive in several events when entities split it.
fn append(target: &mut Option<String>, text: &str) {
    match target {
        Some(existing) => existing.push_str(text),
        None => *target = Some(text.to_string()),
    }
}
