//! Skill taxonomy — the fixed category → terms → weight table used for skill recognition.
//!
//! Built once at startup and injected into the engine. Terms are lowercase canonical
//! strings and may contain regex metacharacters ("c++", ".net", "pl/sql").

use serde::{Deserialize, Serialize};

/// The five technical skill categories, in feedback/report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategoryKind {
    Languages,
    Frameworks,
    Databases,
    Cloud,
    Tools,
}

impl SkillCategoryKind {
    pub const ALL: [SkillCategoryKind; 5] = [
        SkillCategoryKind::Languages,
        SkillCategoryKind::Frameworks,
        SkillCategoryKind::Databases,
        SkillCategoryKind::Cloud,
        SkillCategoryKind::Tools,
    ];

    /// Heading used in the suggestions text.
    pub fn display_name(self) -> &'static str {
        match self {
            SkillCategoryKind::Languages => "Programming Languages",
            SkillCategoryKind::Frameworks => "Frameworks & Libraries",
            SkillCategoryKind::Databases => "Databases",
            SkillCategoryKind::Cloud => "Cloud & DevOps",
            SkillCategoryKind::Tools => "Development Tools",
        }
    }

    pub fn index(self) -> usize {
        match self {
            SkillCategoryKind::Languages => 0,
            SkillCategoryKind::Frameworks => 1,
            SkillCategoryKind::Databases => 2,
            SkillCategoryKind::Cloud => 3,
            SkillCategoryKind::Tools => 4,
        }
    }
}

/// One taxonomy category: ordered canonical terms and the weight each match is worth.
#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub kind: SkillCategoryKind,
    pub terms: Vec<String>,
    pub weight: f64,
}

/// Immutable skill table. Categories are always stored in `SkillCategoryKind::ALL` order.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<SkillCategory>,
}

impl Taxonomy {
    /// Builds a taxonomy from (kind, terms, weight) rows.
    ///
    /// Terms are lowercased and deduplicated within their category (first occurrence wins).
    /// The same term may still appear in two categories; each category scores it separately.
    pub fn new(rows: Vec<(SkillCategoryKind, Vec<&str>, f64)>) -> Self {
        let mut categories: Vec<SkillCategory> = rows
            .into_iter()
            .map(|(kind, terms, weight)| {
                let mut seen: Vec<String> = Vec::with_capacity(terms.len());
                for term in terms {
                    let term = term.trim().to_lowercase();
                    if !term.is_empty() && !seen.contains(&term) {
                        seen.push(term);
                    }
                }
                SkillCategory {
                    kind,
                    terms: seen,
                    weight,
                }
            })
            .collect();
        categories.sort_by_key(|c| c.kind.index());
        Self { categories }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// True when `word` is exactly one of the terms of any category.
    pub fn contains_term(&self, word: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.terms.iter().any(|t| t == word))
    }

    pub fn term_count(&self) -> usize {
        self.categories.iter().map(|c| c.terms.len()).sum()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Taxonomy::new(vec![
            (SkillCategoryKind::Languages, LANGUAGES.to_vec(), 2.5),
            (SkillCategoryKind::Frameworks, FRAMEWORKS.to_vec(), 2.0),
            (SkillCategoryKind::Databases, DATABASES.to_vec(), 1.5),
            (SkillCategoryKind::Cloud, CLOUD.to_vec(), 1.5),
            (SkillCategoryKind::Tools, TOOLS.to_vec(), 1.0),
        ])
    }
}

const LANGUAGES: &[&str] = &[
    "javascript", "typescript", "python", "java", "c++", "c#", "ruby", "go", "rust", "php",
    "swift", "kotlin", "scala", "perl", "r", "dart", "haskell", "clojure", "sql", "html", "css",
    "objective-c", "matlab", "groovy", "lua", "elixir", "erlang", "fortran", "cobol", "assembly",
    "bash", "powershell", "shell", "f#", "vb.net", "delphi", "abap", "sas", "julia",
    "typescript", "pl/sql", "apex", "actionscript", "ada", "lisp", "prolog", "scheme", "ocaml",
    "crystal", "nim", "smalltalk", "vhdl", "verilog", "awk", "sed",
];

const FRAMEWORKS: &[&str] = &[
    "react", "reactjs", "angular", "angularjs", "vue", "vuejs", "svelte", "nextjs", "next.js",
    "nuxt", "nuxt.js", "django", "flask", "spring", "spring boot", "express", "express.js",
    "fastapi", "rails", "ruby on rails", "laravel", "dotnet", ".net", ".net core", "flutter",
    "electron", "react native", "tensorflow", "pytorch", "node", "nodejs", "nestjs", "symfony",
    "zend", "cakephp", "meteor", "ember", "backbone", "bootstrap", "material-ui", "mui",
    "tailwindcss", "chakra ui", "redux", "mobx", "apollo", "graphql", "gatsby", "blazor",
    "quasar", "ionic", "cordova", "capacitor", "struts", "play", "grails", "micronaut",
    "quarkus", "servlet", "jsp", "jsf", "primefaces", "vaadin", "jhipster", "sails.js",
    "adonisjs", "koa", "hapi", "sinatra", "phoenix", "actix", "rocket", "fiber", "gin", "echo",
    "beego", "buffalo", "hanami", "padrino", "volt", "crystal", "amber",
];

const DATABASES: &[&str] = &[
    "mysql", "postgresql", "postgres", "mongodb", "firebase", "supabase", "dynamodb", "redis",
    "cassandra", "sqlite", "oracle", "sql server", "mariadb", "cockroachdb", "elasticsearch",
    "arangodb", "couchdb", "influxdb", "neo4j", "memcached", "hbase", "redshift", "bigquery",
    "snowflake", "db2", "teradata", "firebird", "informix", "sybase", "timescaledb", "tidb",
    "clickhouse", "duckdb", "realm", "fauna", "aws aurora", "azure cosmos db",
];

const CLOUD: &[&str] = &[
    "aws", "amazon web services", "azure", "gcp", "google cloud", "google cloud platform",
    "cloud computing", "kubernetes", "docker", "terraform", "serverless", "lambda", "ec2", "s3",
    "cloudformation", "cloud run", "cloud functions", "cloudflare", "digitalocean", "heroku",
    "netlify", "vercel", "openshift", "cloudwatch", "cloudfront", "route 53",
    "elastic beanstalk", "app engine", "dataproc", "bigtable", "pubsub", "container registry",
    "aks", "eks", "fargate", "app service", "functions", "event grid", "event hub",
    "logic apps", "batch", "cloud armor", "anthos", "istio", "argo", "helm", "rancher", "mesos",
    "nomad", "consul", "vault", "packer", "spinnaker", "jenkins x",
];

const TOOLS: &[&str] = &[
    "git", "github", "gitlab", "bitbucket", "jira", "jenkins", "travis", "travis ci",
    "circleci", "circle ci", "github actions", "gitlab ci", "azure devops", "webpack", "babel",
    "vite", "eslint", "prettier", "jest", "cypress", "selenium", "testing", "mocha", "chai",
    "jasmine", "karma", "ava", "enzyme", "puppeteer", "playwright", "storybook", "postman",
    "insomnia", "swagger", "openapi", "docker compose", "vagrant", "virtualbox", "vmware", "npm",
    "yarn", "pnpm", "rush", "lerna", "husky", "lint-staged", "commitizen", "cz-cli",
    "semantic-release", "sonarqube", "coveralls", "codecov", "snyk", "dependabot", "renovate",
    "logstash", "kibana", "grafana", "prometheus", "datadog", "new relic", "splunk",
    "papertrail", "rollbar", "sentry", "bugsnag", "airbrake", "segment", "mixpanel",
    "amplitude", "heap", "google analytics", "firebase analytics", "appcenter", "crashlytics",
    "fabric", "testflight", "appium", "xcode", "android studio", "visual studio", "vscode",
    "intellij", "pycharm", "webstorm", "eclipse", "netbeans", "sublime text", "atom",
    "notepad++", "ultraedit", "emacs", "vim", "nano",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_has_five_categories_in_order() {
        let taxonomy = Taxonomy::default();
        let kinds: Vec<_> = taxonomy.categories().iter().map(|c| c.kind).collect();
        assert_eq!(kinds, SkillCategoryKind::ALL.to_vec());
    }

    #[test]
    fn test_default_weights() {
        let taxonomy = Taxonomy::default();
        let weights: Vec<f64> = taxonomy.categories().iter().map(|c| c.weight).collect();
        assert_eq!(weights, vec![2.5, 2.0, 1.5, 1.5, 1.0]);
    }

    #[test]
    fn test_duplicate_terms_within_category_are_collapsed() {
        let taxonomy = Taxonomy::default();
        let languages = &taxonomy.categories()[0];
        let ts = languages.terms.iter().filter(|t| *t == "typescript").count();
        assert_eq!(ts, 1);
        // first occurrence keeps its position
        assert_eq!(languages.terms[1], "typescript");
    }

    #[test]
    fn test_term_shared_across_categories_is_kept_in_both() {
        let taxonomy = Taxonomy::default();
        let holders: Vec<_> = taxonomy
            .categories()
            .iter()
            .filter(|c| c.terms.iter().any(|t| t == "crystal"))
            .map(|c| c.kind)
            .collect();
        assert_eq!(
            holders,
            vec![SkillCategoryKind::Languages, SkillCategoryKind::Frameworks]
        );
    }

    #[test]
    fn test_contains_term_is_exact() {
        let taxonomy = Taxonomy::default();
        assert!(taxonomy.contains_term("kubernetes"));
        assert!(taxonomy.contains_term("c++"));
        assert!(!taxonomy.contains_term("kubernete"));
        assert!(!taxonomy.contains_term("experience"));
    }

    #[test]
    fn test_rows_are_sorted_and_lowercased() {
        let taxonomy = Taxonomy::new(vec![
            (SkillCategoryKind::Tools, vec!["Git"], 1.0),
            (SkillCategoryKind::Languages, vec![" Rust ", "rust"], 2.5),
        ]);
        assert_eq!(taxonomy.categories()[0].kind, SkillCategoryKind::Languages);
        assert_eq!(taxonomy.categories()[0].terms, vec!["rust".to_string()]);
        assert_eq!(taxonomy.categories()[1].terms, vec!["git".to_string()]);
        assert_eq!(taxonomy.term_count(), 2);
    }
}
