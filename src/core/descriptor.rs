//! Extracts the module identity from a `pom.xml`.

use crate::domain::model::ModuleId;
use crate::utils::error::{Result, ScopeError};
use roxmltree::{Document, Node, ParsingOptions};

pub const DEFAULT_DESCRIPTOR_FILE: &str = "pom.xml";

/// Parses descriptor text into a module identifier.
///
/// `Ok(None)` means the document is well formed but declares no
/// `artifactId`. Only direct children of `<project>` and `<project><parent>`
/// are consulted, so dependency and plugin coordinates never leak in.
pub fn parse_module_id(content: &str) -> Result<Option<ModuleId>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(content, options)?;
    let project = doc.root_element();

    if !project.has_tag_name("project") {
        return Err(ScopeError::DescriptorError {
            message: format!(
                "expected <project> root element, found <{}>",
                project.tag_name().name()
            ),
        });
    }

    let artifact_id = match child_text(project, "artifactId") {
        Some(id) => id,
        None => return Ok(None),
    };

    let parent_group_id = project
        .children()
        .find(|n| n.has_tag_name("parent"))
        .and_then(|parent| child_text(parent, "groupId"));

    Ok(ModuleId::new(artifact_id, parent_group_id))
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|n| n.has_tag_name(name))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
