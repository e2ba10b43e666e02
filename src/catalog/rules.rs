//! Built-in Rule Table
//!
//! The full technology signature table as declarative data. Entries are
//! grouped by category; within the table, order is meaningful (it is the
//! tie-break order for equal-confidence detections).
//!
//! Per-signal confidences are hand-tuned constants carried over unchanged;
//! do not rebalance them when adding entries.

use super::{Signal, TechCategory, TechnologyRule};

/// Define one technology rule concisely
macro_rules! tech {
    ($key:literal, $name:literal, $cat:ident, [$($sig:expr),+ $(,)?]) => {
        TechnologyRule {
            key: $key,
            display_name: $name,
            category: TechCategory::$cat,
            signals: vec![$($sig),+],
        }
    };
}

pub(super) fn builtin_rules() -> Vec<TechnologyRule> {
    vec![
        // =====================================================================
        // Core Languages & Runtimes
        // =====================================================================
        tech!("typescript", "TypeScript", Language, [
            Signal::file("tsconfig.json", 0.95),
            Signal::package("typescript", 0.9),
            Signal::content_pattern(r"\.tsx?$", 0.8),
        ]),
        tech!("javascript", "JavaScript", Language, [
            Signal::file("package.json", 0.9),
            Signal::content_pattern(r"\.jsx?$", 0.8),
        ]),
        tech!("node", "Node.js", Language, [
            Signal::package("package.json", 0.95),
            Signal::content("node:", 0.85),
        ]),
        // =====================================================================
        // Frontend Frameworks
        // =====================================================================
        tech!("react", "React", Framework, [
            Signal::package("react", 0.95),
            Signal::content_pattern(r#"import.*from\s+['"]react['"]"#, 0.9),
        ]),
        tech!("tanstack-router", "TanStack Router", Framework, [
            Signal::package("@tanstack/react-router", 0.95),
            Signal::package("@tanstack/router", 0.95),
        ]),
        tech!("tanstack-start", "TanStack Start", Framework, [
            Signal::package("@tanstack/start", 0.95),
        ]),
        tech!("nextjs", "Next.js", Framework, [
            Signal::package("next", 0.95),
            Signal::file("next.config.js", 0.95),
            Signal::file("next.config.mjs", 0.95),
        ]),
        tech!("vite", "Vite", Framework, [
            Signal::package("vite", 0.95),
            Signal::file_pattern(r"vite\.config\.(js|ts|mjs)$", 0.95),
        ]),
        tech!("tailwind", "Tailwind CSS", Framework, [
            Signal::package("tailwindcss", 0.95),
            Signal::file_pattern(r"tailwind\.config\.(js|ts|mjs|cjs)$", 0.95),
        ]),
        // =====================================================================
        // Authentication
        // =====================================================================
        tech!("clerk", "Clerk", Auth, [
            Signal::package("@clerk/clerk-react", 0.95),
            Signal::package("@clerk/nextjs", 0.95),
            Signal::package("@clerk/tanstack-start", 0.95),
        ]),
        tech!("authjs", "Auth.js", Auth, [
            Signal::package("next-auth", 0.95),
            Signal::package("@auth/core", 0.95),
        ]),
        tech!("supabase", "Supabase Auth", Auth, [
            Signal::package("@supabase/supabase-js", 0.9),
            Signal::package("@supabase/auth", 0.95),
        ]),
        tech!("firebase", "Firebase Auth", Auth, [
            Signal::package("firebase", 0.85),
            Signal::package("@firebase/auth", 0.95),
        ]),
        // =====================================================================
        // Databases & ORMs
        // =====================================================================
        tech!("postgres", "PostgreSQL", Database, [
            Signal::package("pg", 0.95),
            Signal::package("postgres", 0.95),
            Signal::content("postgresql://", 0.9),
        ]),
        tech!("mysql", "MySQL", Database, [
            Signal::package("mysql2", 0.95),
            Signal::package("mysql", 0.95),
        ]),
        tech!("mongodb", "MongoDB", Database, [
            Signal::package("mongodb", 0.95),
            Signal::package("mongoose", 0.95),
        ]),
        tech!("redis", "Redis", Database, [
            Signal::package("redis", 0.95),
            Signal::package("ioredis", 0.95),
        ]),
        tech!("prisma", "Prisma", Database, [
            Signal::package("@prisma/client", 0.95),
            Signal::package("prisma", 0.95),
            Signal::file("schema.prisma", 0.95),
        ]),
        tech!("drizzle", "Drizzle ORM", Database, [
            Signal::package("drizzle-orm", 0.95),
            Signal::file_pattern(r"drizzle\.config\.(ts|js)$", 0.95),
        ]),
        tech!("convex", "Convex", Database, [
            Signal::package("convex", 0.95),
            Signal::file("convex.json", 0.95),
        ]),
        // =====================================================================
        // Infrastructure / Deploy
        // =====================================================================
        tech!("cloudflare", "Cloudflare", Infra, [
            Signal::file("wrangler.toml", 0.95),
            Signal::package("wrangler", 0.9),
            Signal::package("@cloudflare/workers-types", 0.9),
        ]),
        tech!("netlify", "Netlify", Infra, [
            Signal::file("netlify.toml", 0.95),
            Signal::file("_redirects", 0.7),
        ]),
        tech!("vercel", "Vercel", Infra, [
            Signal::file("vercel.json", 0.95),
            Signal::package("@vercel/node", 0.85),
        ]),
        tech!("docker", "Docker", Infra, [
            Signal::file("Dockerfile", 0.95),
            Signal::file("docker-compose.yml", 0.95),
        ]),
        // =====================================================================
        // Observability & Misc Tools
        // =====================================================================
        tech!("sentry", "Sentry", Tool, [
            Signal::package("@sentry/react", 0.95),
            Signal::package("@sentry/node", 0.95),
            Signal::package("@sentry/nextjs", 0.95),
        ]),
        tech!("firecrawl", "Firecrawl", Tool, [
            Signal::package("@mendable/firecrawl-js", 0.95),
            Signal::package("firecrawl", 0.95),
        ]),
        tech!("autumn", "Autumn", Tool, [
            Signal::package("autumn", 0.95),
        ]),
        // =====================================================================
        // Extended Languages
        // =====================================================================
        tech!("html", "HTML", Language, [
            Signal::content_pattern(r"(?i)\.html?$", 0.95),
            Signal::content_pattern(r"(?i)\.htm$", 0.9),
            Signal::content_pattern(r"(?i)<(!DOCTYPE html|html)", 0.85),
        ]),
        tech!("css", "CSS", Language, [
            Signal::content_pattern(r"(?i)\.css$", 0.95),
            Signal::content_pattern(r"(?i)\.(scss|sass|less)$", 0.9),
            Signal::package("postcss", 0.7),
        ]),
        tech!("sass", "Sass/SCSS", Language, [
            Signal::package("sass", 0.95),
            Signal::package("node-sass", 0.95),
            Signal::content_pattern(r"(?i)\.scss$", 0.95),
            Signal::content_pattern(r"(?i)\.sass$", 0.95),
        ]),
        tech!("less", "Less", Language, [
            Signal::package("less", 0.95),
            Signal::content_pattern(r"(?i)\.less$", 0.95),
        ]),
        tech!("dom", "DOM (Document Object Model)", Language, [
            Signal::content_pattern(
                r"(?i)document\.(getElementById|querySelector|createElement)",
                0.7,
            ),
            Signal::content_pattern(r"(?i)window\.(addEventListener|location|localStorage)", 0.7),
        ]),
        tech!("http", "HTTP/HTTPS", Language, [
            Signal::content_pattern(r"(?i)https?://", 0.5),
            Signal::package("http-server", 0.8),
        ]),
        tech!("bash", "Bash", Language, [
            Signal::file(".bashrc", 0.8),
            Signal::file(".bash_profile", 0.8),
            Signal::content_pattern(r"\.sh$", 0.9),
        ]),
        tech!("coffeescript", "CoffeeScript", Language, [
            Signal::package("coffeescript", 0.95),
            Signal::content_pattern(r"\.coffee$", 0.9),
        ]),
        tech!("perl", "Perl", Language, [
            Signal::content_pattern(r"\.pl$", 0.9),
            Signal::content_pattern(r"\.pm$", 0.85),
        ]),
        tech!("ocaml", "OCaml", Language, [
            Signal::file("dune", 0.95),
            Signal::content_pattern(r"\.ml$", 0.9),
        ]),
        tech!("nim", "Nim", Language, [
            Signal::file_pattern(r"\.nimble$", 0.95),
            Signal::content_pattern(r"\.nim$", 0.9),
        ]),
        tech!("d", "D", Language, [
            Signal::file("dub.json", 0.95),
            Signal::content_pattern(r"\.d$", 0.85),
        ]),
        tech!("fortran", "Fortran", Language, [
            Signal::content_pattern(r"\.f90$", 0.95),
            Signal::content_pattern(r"\.f95$", 0.95),
        ]),
        tech!("groovy", "Groovy", Language, [
            Signal::content_pattern(r"\.groovy$", 0.95),
            Signal::file("Jenkinsfile", 0.8),
        ]),
        tech!("vb", "Visual Basic", Language, [
            Signal::content_pattern(r"\.vb$", 0.95),
        ]),
        tech!("liquid", "Liquid", Language, [
            Signal::content_pattern(r"\.liquid$", 0.95),
        ]),
        tech!("terraform", "Terraform", Language, [
            Signal::file_pattern(r"\.tf$", 0.95),
            Signal::file(".terraform.lock.hcl", 0.95),
        ]),
        // =====================================================================
        // Extended Frameworks
        // =====================================================================
        tech!("astro", "Astro", Framework, [
            Signal::package("astro", 0.95),
            Signal::file("astro.config.mjs", 0.95),
            Signal::content_pattern(r"\.astro$", 0.9),
        ]),
        tech!("ember", "Ember.js", Framework, [
            Signal::package("ember-cli", 0.95),
            Signal::file("ember-cli-build.js", 0.95),
        ]),
        tech!("backbone", "Backbone.js", Framework, [
            Signal::package("backbone", 0.95),
        ]),
        tech!("preact", "Preact", Framework, [
            Signal::package("preact", 0.95),
        ]),
        tech!("alpinejs", "Alpine.js", Framework, [
            Signal::package("alpinejs", 0.95),
        ]),
        tech!("electron", "Electron", Framework, [
            Signal::package("electron", 0.95),
            Signal::file("main.js", 0.6),
        ]),
        tech!("tauri", "Tauri", Framework, [
            Signal::file("tauri.conf.json", 0.95),
            Signal::package("@tauri-apps/api", 0.95),
        ]),
        tech!("remix", "Remix", Framework, [
            Signal::package("@remix-run/react", 0.95),
            Signal::file("remix.config.js", 0.95),
        ]),
        tech!("gatsby", "Gatsby", Framework, [
            Signal::package("gatsby", 0.95),
            Signal::file("gatsby-config.js", 0.95),
        ]),
        tech!("deno", "Deno", Framework, [
            Signal::file("deno.json", 0.95),
            Signal::file("deno.jsonc", 0.95),
        ]),
        tech!("bun_framework", "Bun", Framework, [
            Signal::package("bun", 0.95),
            Signal::file("bunfig.toml", 0.95),
        ]),
        tech!("bottle", "Bottle", Framework, [
            Signal::package("bottle", 0.95),
        ]),
        tech!("cakephp", "CakePHP", Framework, [
            Signal::package("cakephp/cakephp", 0.95),
        ]),
        tech!("codeigniter", "CodeIgniter", Framework, [
            Signal::file_pattern(r"application/config/config\.php", 0.95),
        ]),
        tech!("symfony", "Symfony", Framework, [
            Signal::package("symfony/symfony", 0.95),
            Signal::file("symfony.lock", 0.95),
        ]),
        tech!("yii", "Yii", Framework, [
            Signal::package("yiisoft/yii2", 0.95),
        ]),
        tech!("hono", "Hono", Framework, [
            Signal::package("hono", 0.95),
        ]),
        tech!("koa", "Koa", Framework, [
            Signal::package("koa", 0.95),
        ]),
        // =====================================================================
        // Extended Databases
        // =====================================================================
        tech!("sqlite", "SQLite", Database, [
            Signal::package("sqlite3", 0.95),
            Signal::package("better-sqlite3", 0.95),
            Signal::content_pattern(r"\.sqlite$", 0.9),
            Signal::content_pattern(r"\.db$", 0.7),
        ]),
        tech!("mariadb", "MariaDB", Database, [
            Signal::package("mariadb", 0.95),
        ]),
        tech!("duckdb", "DuckDB", Database, [
            Signal::package("duckdb", 0.95),
            Signal::content_pattern(r"\.duckdb$", 0.95),
        ]),
        tech!("elasticsearch", "Elasticsearch", Database, [
            Signal::package("@elastic/elasticsearch", 0.95),
            Signal::package("elasticsearch", 0.95),
        ]),
        tech!("cassandra", "Cassandra", Database, [
            Signal::package("cassandra-driver", 0.95),
        ]),
        tech!("neo4j", "Neo4j", Database, [
            Signal::package("neo4j-driver", 0.95),
        ]),
        tech!("influxdb", "InfluxDB", Database, [
            Signal::package("@influxdata/influxdb-client", 0.95),
        ]),
        // =====================================================================
        // Testing
        // =====================================================================
        tech!("jest", "Jest", Tool, [
            Signal::package("jest", 0.95),
            Signal::file("jest.config.js", 0.95),
            Signal::file("jest.config.ts", 0.95),
        ]),
        tech!("vitest", "Vitest", Tool, [
            Signal::package("vitest", 0.95),
            Signal::file("vitest.config.ts", 0.95),
        ]),
        tech!("cypress", "Cypress", Tool, [
            Signal::package("cypress", 0.95),
            Signal::file("cypress.config.js", 0.95),
            Signal::file("cypress.config.ts", 0.95),
        ]),
        tech!("playwright", "Playwright", Tool, [
            Signal::package("@playwright/test", 0.95),
            Signal::file("playwright.config.ts", 0.95),
        ]),
        tech!("mocha", "Mocha", Tool, [
            Signal::package("mocha", 0.95),
            Signal::file(".mocharc.json", 0.95),
        ]),
        tech!("jasmine", "Jasmine", Tool, [
            Signal::package("jasmine", 0.95),
            Signal::file("jasmine.json", 0.95),
        ]),
        tech!("puppeteer", "Puppeteer", Tool, [
            Signal::package("puppeteer", 0.95),
        ]),
        tech!("chai", "Chai", Tool, [
            Signal::package("chai", 0.95),
        ]),
        tech!("sinon", "Sinon", Tool, [
            Signal::package("sinon", 0.95),
        ]),
        tech!("ava", "AVA", Tool, [
            Signal::package("ava", 0.95),
        ]),
        tech!("phpunit", "PHPUnit", Tool, [
            Signal::package("phpunit/phpunit", 0.95),
            Signal::file("phpunit.xml", 0.95),
        ]),
        tech!("pytest", "Pytest", Tool, [
            Signal::package("pytest", 0.95),
            Signal::file("pytest.ini", 0.95),
        ]),
        tech!("rspec", "RSpec", Tool, [
            Signal::package("rspec", 0.95),
            Signal::file(".rspec", 0.95),
        ]),
        // =====================================================================
        // Build Tools & Libraries
        // =====================================================================
        tech!("webpack", "Webpack", Tool, [
            Signal::package("webpack", 0.95),
            Signal::file("webpack.config.js", 0.95),
        ]),
        tech!("babel", "Babel", Tool, [
            Signal::package("@babel/core", 0.95),
            Signal::file(".babelrc", 0.95),
            Signal::file("babel.config.js", 0.95),
        ]),
        tech!("eslint", "ESLint", Tool, [
            Signal::package("eslint", 0.95),
            Signal::file(".eslintrc.js", 0.95),
            Signal::file("eslint.config.js", 0.95),
        ]),
        tech!("prettier", "Prettier", Tool, [
            Signal::package("prettier", 0.95),
            Signal::file(".prettierrc", 0.95),
        ]),
        tech!("esbuild", "esbuild", Tool, [
            Signal::package("esbuild", 0.95),
        ]),
        tech!("rollup", "Rollup", Tool, [
            Signal::package("rollup", 0.95),
            Signal::file("rollup.config.js", 0.95),
        ]),
        tech!("parcel", "Parcel", Tool, [
            Signal::package("parcel", 0.95),
        ]),
        tech!("turbo", "Turborepo", Tool, [
            Signal::package("turbo", 0.95),
            Signal::file("turbo.json", 0.95),
        ]),
        tech!("nx", "Nx", Tool, [
            Signal::package("@nx/workspace", 0.95),
            Signal::file("nx.json", 0.95),
        ]),
        tech!("pnpm", "pnpm", Tool, [
            Signal::file("pnpm-lock.yaml", 0.95),
            Signal::file("pnpm-workspace.yaml", 0.95),
        ]),
        tech!("yarn", "Yarn", Tool, [
            Signal::file("yarn.lock", 0.95),
        ]),
        tech!("npm", "npm", Tool, [
            Signal::file("package-lock.json", 0.95),
            Signal::file("package.json", 0.8),
        ]),
        tech!("git", "Git", Tool, [
            Signal::file(".gitignore", 0.9),
            Signal::file(".gitattributes", 0.85),
        ]),
        tech!("graphql", "GraphQL", Tool, [
            Signal::package("graphql", 0.95),
            Signal::file_pattern(r"\.graphql$", 0.95),
            Signal::file_pattern(r"\.gql$", 0.95),
        ]),
        tech!("apollo", "Apollo GraphQL", Tool, [
            Signal::package("@apollo/client", 0.95),
            Signal::package("apollo-server", 0.95),
        ]),
        tech!("redux", "Redux", Tool, [
            Signal::package("redux", 0.95),
            Signal::package("@reduxjs/toolkit", 0.95),
        ]),
        tech!("zustand", "Zustand", Tool, [
            Signal::package("zustand", 0.95),
        ]),
        tech!("jotai", "Jotai", Tool, [
            Signal::package("jotai", 0.95),
        ]),
        tech!("rxjs", "RxJS", Tool, [
            Signal::package("rxjs", 0.95),
        ]),
        tech!("lodash", "Lodash", Tool, [
            Signal::package("lodash", 0.95),
        ]),
        tech!("axios_lib", "Axios", Tool, [
            Signal::package("axios", 0.95),
        ]),
        tech!("storybook", "Storybook", Tool, [
            Signal::package("@storybook/react", 0.95),
            Signal::file(".storybook/main.js", 0.95),
        ]),
        tech!("swagger", "Swagger/OpenAPI", Tool, [
            Signal::file("swagger.json", 0.95),
            Signal::file("openapi.yaml", 0.95),
        ]),
        // =====================================================================
        // Extended Infrastructure
        // =====================================================================
        tech!("kubernetes", "Kubernetes", Infra, [
            Signal::file_pattern(r"deployment\.yaml", 0.9),
            Signal::file_pattern(r"service\.yaml", 0.8),
            Signal::content("kind: Deployment", 0.85),
        ]),
        tech!("terraform_tool", "Terraform", Infra, [
            Signal::file_pattern(r"\.tf$", 0.95),
            Signal::file(".terraform.lock.hcl", 0.95),
        ]),
        tech!("ansible_tool", "Ansible", Infra, [
            Signal::package("ansible", 0.95),
            Signal::file("ansible.cfg", 0.95),
        ]),
        tech!("nginx", "Nginx", Infra, [
            Signal::file("nginx.conf", 0.95),
            Signal::file_pattern(r"sites-available/", 0.8),
        ]),
        tech!("apache", "Apache", Infra, [
            Signal::file("httpd.conf", 0.95),
            Signal::file(".htaccess", 0.9),
        ]),
    ]
}
