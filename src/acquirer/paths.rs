//! Candidate Path List
//!
//! The fixed, ordered list of paths probed on every acquisition: dependency
//! manifests, build/config files, and root documentation across language
//! ecosystems. Order matters - it is the order fetched files are returned
//! in, and earlier manifests win when dependency maps are merged.
//!
//! Exhaustive crawling is out of scope; this list is the whole surface the
//! detector ever reads.

/// Paths fetched from the repository root on every acquisition
pub const CANDIDATE_PATHS: &[&str] = &[
    // JavaScript / TypeScript ecosystem
    "package.json",
    "package-lock.json",
    "pnpm-lock.yaml",
    "pnpm-workspace.yaml",
    "yarn.lock",
    "tsconfig.json",
    "tailwind.config.js",
    "tailwind.config.ts",
    "postcss.config.js",
    "vite.config.js",
    "vite.config.ts",
    "webpack.config.js",
    "rollup.config.js",
    "turbo.json",
    "nx.json",
    "astro.config.mjs",
    "next.config.js",
    "next.config.mjs",
    "remix.config.js",
    "gatsby-config.js",
    "nuxt.config.js",
    "nuxt.config.ts",
    "svelte.config.js",
    "angular.json",
    "ember-cli-build.js",
    ".babelrc",
    "babel.config.js",
    ".eslintrc.js",
    "eslint.config.js",
    ".prettierrc",
    "jest.config.js",
    "jest.config.ts",
    "vitest.config.ts",
    "cypress.config.js",
    "cypress.config.ts",
    "playwright.config.ts",
    ".mocharc.json",
    "nest-cli.json",
    "metro.config.js",
    "app.json",
    "electron-builder.yml",
    "tauri.conf.json",
    // Monorepo probes
    "apps/package.json",
    "packages/package.json",
    // Infrastructure / deploy
    "wrangler.toml",
    "netlify.toml",
    "vercel.json",
    "Dockerfile",
    "docker-compose.yml",
    "deployment.yaml",
    "service.yaml",
    "nginx.conf",
    "httpd.conf",
    ".htaccess",
    "ansible.cfg",
    ".terraform.lock.hcl",
    "terraform.tfvars",
    ".gitlab-ci.yml",
    "Jenkinsfile",
    // Documentation
    "README.md",
    "swagger.json",
    "openapi.yaml",
    // Databases & ORMs
    "schema.prisma",
    "drizzle.config.ts",
    "drizzle.config.js",
    "convex.json",
    // Python
    "requirements.txt",
    "pyproject.toml",
    "Pipfile",
    "setup.py",
    "manage.py",
    "pytest.ini",
    // Flutter / Dart
    "pubspec.yaml",
    "pubspec.lock",
    // Go
    "go.mod",
    "go.sum",
    // Rust
    "Cargo.toml",
    "Cargo.lock",
    // Java / Kotlin
    "pom.xml",
    "build.gradle",
    "build.gradle.kts",
    "gradlew",
    "settings.gradle",
    // Swift
    "Package.swift",
    "Podfile",
    // C# / .NET
    "project.json",
    "appsettings.json",
    // PHP
    "composer.json",
    "composer.lock",
    "artisan",
    "symfony.lock",
    "phpunit.xml",
    // Ruby
    "Gemfile",
    "Gemfile.lock",
    "Rakefile",
    "config/routes.rb",
    ".rspec",
    // Elixir
    "mix.exs",
    "mix.lock",
    // Scala
    "build.sbt",
    // Haskell
    "stack.yaml",
    // Clojure
    "project.clj",
    "deps.edn",
    // Erlang
    "rebar.config",
    // OCaml
    "dune-project",
    // R
    "DESCRIPTION",
    // Julia
    "Project.toml",
    "Manifest.toml",
    // Zig
    "build.zig",
    // C / C++
    "CMakeLists.txt",
    "Makefile",
    // Solidity
    "hardhat.config.js",
    "truffle-config.js",
    "foundry.toml",
    // Spring
    "application.properties",
    "application.yml",
    // Game engines
    "ProjectSettings/ProjectVersion.txt",
    "project.godot",
    // Runtimes
    "deno.json",
    "deno.jsonc",
    "bunfig.toml",
    // Environment
    ".env.example",
];
