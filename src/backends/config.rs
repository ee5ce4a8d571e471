use crate::core::Operation;

/// Placeholder expanded to the package list inside an argument template.
pub const PACKAGES_PLACEHOLDER: &str = "{packages}";

/// Argument shape of one operation, excluding the binary itself.
///
/// `Args` is a whitespace-separated template where the `{packages}` token is
/// replaced by every requested package, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgTemplate {
    Args(&'static str),
    Unsupported,
}

impl ArgTemplate {
    /// Expand the template, or `None` when the manager lacks the operation.
    pub fn render(&self, packages: &[String]) -> Option<Vec<String>> {
        match self {
            Self::Unsupported => None,
            Self::Args(template) => Some(
                template
                    .split_whitespace()
                    .flat_map(|token| {
                        if token == PACKAGES_PLACEHOLDER {
                            packages.to_vec()
                        } else {
                            vec![token.to_string()]
                        }
                    })
                    .collect(),
            ),
        }
    }
}

/// Static description of one native package manager.
///
/// Every operation has a template; `upgrade_all` is used when no packages are
/// given, `upgrade` when some are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerDescriptor {
    /// Unique identifier (e.g. "apt", "chocolatey")
    pub name: &'static str,

    /// Executable looked up on PATH (e.g. "apt", "choco")
    pub command: &'static str,

    pub install: ArgTemplate,
    pub remove: ArgTemplate,
    pub update: ArgTemplate,
    pub upgrade_all: ArgTemplate,
    pub upgrade: ArgTemplate,
    pub search: ArgTemplate,
}

impl ManagerDescriptor {
    /// Template that applies to `operation` for this package list.
    pub fn template_for(&self, operation: Operation, packages: &[String]) -> ArgTemplate {
        match operation {
            Operation::Install => self.install,
            Operation::Remove => self.remove,
            Operation::Update => self.update,
            Operation::Upgrade if packages.is_empty() => self.upgrade_all,
            Operation::Upgrade => self.upgrade,
            Operation::Search => self.search,
        }
    }

    /// Arguments passed to `command`, or `None` if the operation is unsupported.
    pub fn args_for(&self, operation: Operation, packages: &[String]) -> Option<Vec<String>> {
        let packages: &[String] = match operation {
            Operation::Update => &[],
            _ => packages,
        };
        self.template_for(operation, packages).render(packages)
    }

    /// `command args...` as a single display line.
    pub fn render_command(&self, args: &[String]) -> String {
        if args.is_empty() {
            self.command.to_string()
        } else {
            format!("{} {}", self.command, args.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkgs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    const SAMPLE: ManagerDescriptor = ManagerDescriptor {
        name: "sample",
        command: "smp",
        install: ArgTemplate::Args("install {packages} --yes"),
        remove: ArgTemplate::Args("rm {packages}"),
        update: ArgTemplate::Args("refresh"),
        upgrade_all: ArgTemplate::Args("upgrade --all"),
        upgrade: ArgTemplate::Args("upgrade {packages}"),
        search: ArgTemplate::Unsupported,
    };

    #[test]
    fn placeholder_expands_in_place() {
        assert_eq!(
            SAMPLE.args_for(Operation::Install, &pkgs(&["a", "b"])),
            Some(pkgs(&["install", "a", "b", "--yes"]))
        );
    }

    #[test]
    fn update_ignores_packages() {
        assert_eq!(
            SAMPLE.args_for(Operation::Update, &pkgs(&["ignored"])),
            Some(pkgs(&["refresh"]))
        );
    }

    #[test]
    fn upgrade_switches_form_on_empty_list() {
        assert_eq!(
            SAMPLE.args_for(Operation::Upgrade, &[]),
            Some(pkgs(&["upgrade", "--all"]))
        );
        assert_eq!(
            SAMPLE.args_for(Operation::Upgrade, &pkgs(&["x"])),
            Some(pkgs(&["upgrade", "x"]))
        );
    }

    #[test]
    fn unsupported_template_renders_nothing() {
        assert_eq!(SAMPLE.args_for(Operation::Search, &pkgs(&["x"])), None);
        assert!(SAMPLE.args_for(Operation::Upgrade, &[]).is_some());
    }

    #[test]
    fn render_command_joins_with_single_spaces() {
        assert_eq!(SAMPLE.render_command(&pkgs(&["refresh"])), "smp refresh");
        assert_eq!(SAMPLE.render_command(&[]), "smp");
    }
}
