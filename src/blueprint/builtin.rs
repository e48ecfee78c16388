//! Blueprints compiled into the binary

/// Names of the built-in blueprints
pub const BUILTIN_NAMES: &[&str] = &["ng2", "addon"];

/// A template file of a built-in blueprint
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFile {
    pub path: &'static str,
    pub contents: &'static str,
    pub mobile_only: bool,
}

const fn file(path: &'static str, contents: &'static str) -> BuiltinFile {
    BuiltinFile {
        path,
        contents,
        mobile_only: false,
    }
}

const fn mobile_file(path: &'static str, contents: &'static str) -> BuiltinFile {
    BuiltinFile {
        path,
        contents,
        mobile_only: true,
    }
}

const GITIGNORE: &str = "\
/dist
/tmp
/node_modules
/bower_components
npm-debug.log
.DS_Store
";

const NG2_FILES: &[BuiltinFile] = &[
    file(
        "package.json",
        r#"{
  "name": "<%= dasherizedPackageName %>",
  "version": "0.0.0",
  "private": true,
  "scripts": {
    "start": "ng serve",
    "test": "ng test"
  },
  "devDependencies": {
    "ng-cli": "*"
  }
}
"#,
    ),
    file(
        "README.md",
        "# <%= classifiedPackageName %>\n\nThis project was generated with `ng init`.\n\nSources live in `<%= sourceDir %>/`.\n",
    ),
    file(".gitignore", GITIGNORE),
    file(
        "__src__/index.html",
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <title><%= classifiedPackageName %></title>
  <link rel="stylesheet" href="styles.<%= styleExt %>">
</head>
<body>
  <<%= prefix %>-root>Loading...</<%= prefix %>-root>
  <script src="main.js"></script>
</body>
</html>
"#,
    ),
    file(
        "__src__/main.ts",
        "import { bootstrap } from './app/app.component';\n\nbootstrap();\n",
    ),
    file(
        "__src__/app/app.component.ts",
        r#"export const selector = '<%= prefix %>-root';
export const styleUrls = ['app.component.<%= styleExt %>'];

export function bootstrap(): void {
  console.log('<%= classifiedPackageName %> started');
}
"#,
    ),
    file("__src__/app/app.component.__styleext__", ""),
    file("__src__/styles.__styleext__", "/* Global styles */\n"),
    mobile_file(
        "__src__/manifest.webapp",
        r#"{
  "name": "<%= classifiedPackageName %>",
  "short_name": "<%= dasherizedPackageName %>",
  "start_url": "index.html",
  "display": "standalone"
}
"#,
    ),
];

const ADDON_FILES: &[BuiltinFile] = &[
    file(
        "package.json",
        r#"{
  "name": "<%= dasherizedPackageName %>",
  "version": "0.0.0",
  "keywords": [
    "ember-addon"
  ],
  "main": "index.js"
}
"#,
    ),
    file(
        "README.md",
        "# <%= classifiedPackageName %>\n\nAn addon generated with `ng init`.\n",
    ),
    file(".gitignore", GITIGNORE),
    file(
        "index.js",
        "'use strict';\n\nmodule.exports = {\n  name: '<%= dasherizedPackageName %>'\n};\n",
    ),
    file("__src__/.gitkeep", ""),
];

/// Files of the built-in blueprint `name`, if there is one
pub fn files(name: &str) -> Option<&'static [BuiltinFile]> {
    match name {
        "ng2" => Some(NG2_FILES),
        "addon" => Some(ADDON_FILES),
        _ => None,
    }
}
