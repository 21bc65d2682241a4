use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::utils::json_format;

/// Project name offered when the user just presses enter
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

/// Version written into a freshly scaffolded manifest
pub const INITIAL_VERSION: &str = "0.0.1";

/// Version range pinned for the TypeScript compiler
pub const TYPESCRIPT_VERSION: &str = "^5.2.2";

pub const PACKAGE_JSON: &str = "package.json";
pub const TSCONFIG_JSON: &str = "tsconfig.json";
pub const GITIGNORE: &str = ".gitignore";
pub const SOURCE_DIR: &str = "src";

/// Compiler configuration, written as JSON with comments
pub const TSCONFIG_TEMPLATE: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "useDefineForClassFields": true,
    "module": "ESNext",
    "lib": ["ES2020", "DOM", "DOM.Iterable"],
    "skipLibCheck": true,

    /* Bundler mode */
    "moduleResolution": "bundler",
    "allowImportingTsExtensions": true,
    "resolveJsonModule": true,
    "isolatedModules": true,
    "noEmit": true,

    /* Linting */
    "strict": true,
    "noUnusedLocals": true,
    "noUnusedParameters": true,
    "noFallthroughCasesInSwitch": true,
  },
  "include": ["src"],
}
"#;

/// Ignore rules for a node + vite style TypeScript project
pub const GITIGNORE_TEMPLATE: &str = "# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*
lerna-debug.log*

node_modules
dist
dist-ssr
*.local

# Editor directories and files
.vscode/*
!.vscode/extensions.json
.idea
.DS_Store
*.suo
*.ntvs*
*.njsproj
*.sln
*.sw?
";

/// Contents of the generated package.json, in output key order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub private: bool,
    pub version: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub scripts: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Manifest for a new private ES module project built with `tsc`
    pub fn typescript_starter(name: &str) -> Self {
        Self {
            name: name.to_string(),
            private: true,
            version: INITIAL_VERSION.to_string(),
            module_type: "module".to_string(),
            scripts: BTreeMap::from([("build".to_string(), "tsc".to_string())]),
            dev_dependencies: BTreeMap::from([(
                "typescript".to_string(),
                TYPESCRIPT_VERSION.to_string(),
            )]),
        }
    }

    /// Formatted file contents
    pub fn render(&self) -> serde_json::Result<String> {
        json_format::format_serializable(self)
    }
}

/// Formatted tsconfig.json contents (comments and trailing commas removed)
pub fn render_tsconfig() -> serde_json::Result<String> {
    let value: Value = json_format::parse_jsonc(TSCONFIG_TEMPLATE)?;
    Ok(json_format::to_pretty_string(&value))
}
