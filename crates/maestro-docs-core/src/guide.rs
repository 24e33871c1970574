//! The fixed guide content: "Maestro Startup — Architecture & Implementation
//! Guide", twenty sections of prose, tables, figures, and runbooks.
//!
//! This is data, not behavior. Nothing here talks to the systems it
//! describes; `document()` is pure and returns an equal value on every call.

use crate::doc::{Block, Cell, Document, Inline, Section};

fn text(s: &str) -> Inline {
    Inline::text(s)
}

fn strong(s: &str) -> Inline {
    Inline::strong(s)
}

fn code(s: &str) -> Inline {
    Inline::code(s)
}

fn row(cells: &[&str]) -> Vec<Cell> {
    cells.iter().map(|c| Cell::text(*c)).collect()
}

/// Build the complete document.
pub fn document() -> Document {
    Document {
        title: "Maestro Startup — Architecture & Implementation Guide".to_string(),
        subtitle: "Version 1.0 · Owner: Engineering · Status: Draft".to_string(),
        sections: vec![
            executive_summary(),
            scope_goals(),
            stack_deployment(),
            architecture_overview(),
            components(),
            data_model_flows(),
            security_privacy_compliance(),
            observability_sre(),
            deployment_environments(),
            sizing_pricing(),
            effort_timeline(),
            risks_mitigations(),
            testing_strategy(),
            rollout_plan(),
            maintenance_runbooks(),
            glossary(),
            architecture_diagram(),
            api_specifications(),
            performance_requirements(),
            disaster_recovery(),
        ],
    }
}

// ---------------------------------------------------------------------------
// 1) Executive Summary
// ---------------------------------------------------------------------------

fn executive_summary() -> Section {
    Section {
        anchor: "executive-summary".to_string(),
        title: "Executive Summary".to_string(),
        toc_label: None,
        blocks: vec![Block::paragraph(vec![
            strong("Maestro"),
            text(" is a single AI orchestrator that serves user chats and fetches context through a "),
            strong("tool"),
            text(" named "),
            strong("ATS Context API"),
            text(". We follow a "),
            strong("cache-first"),
            text(" pattern with Redis (L1) and use PostgreSQL as the source of truth. A dedicated "),
            strong("Sync service"),
            text(
                " (ATS DATA MANAGER) fetches ATS data (via Unified.to), normalizes it, upserts \
                 into Postgres, warms Redis, and invalidates outdated keys. LLM inference runs on ",
            ),
            strong("AWS Bedrock"),
            text(
                ". n8n executes the workflow on AWS EC2. Optional Supabase pgvector supports RAG \
                 recall.",
            ),
        ])],
    }
}

// ---------------------------------------------------------------------------
// 2) Scope & Goals
// ---------------------------------------------------------------------------

fn scope_goals() -> Section {
    Section {
        anchor: "scope-goals".to_string(),
        title: "Scope & Goals".to_string(),
        toc_label: None,
        blocks: vec![Block::bullets(vec![
            vec![
                strong("Goals:"),
                text(
                    " Low latency answers; deterministic ATS filters via JS/SQL; durable session \
                     storage; resilient sync (retries/backoff); clean deploy & observability.",
                ),
            ],
            vec![
                strong("Non-Goals:"),
                text(
                    " Multi-agent frameworks; self-hosting LLMs; deep analytics beyond \
                     operational dashboards.",
                ),
            ],
        ])],
    }
}

// ---------------------------------------------------------------------------
// 3) Corner "Stack & Deployment" Table
// ---------------------------------------------------------------------------

fn stack_deployment() -> Section {
    Section {
        anchor: "stack-deployment".to_string(),
        title: "Corner \"Stack & Deployment\" Table".to_string(),
        toc_label: None,
        blocks: vec![Block::table(
            &["Layer", "Tool / Service", "Purpose", "Notes"],
            vec![
                row(&[
                    "AI Inference",
                    "AWS Bedrock (e.g., Claude, Llama)",
                    "LLM for Maestro",
                    "Private/managed. Alternative: Anthropic API / Azure OpenAI / OpenAI.",
                ]),
                row(&[
                    "LLM Cache",
                    "Redis (lmCache) + Smart Keys",
                    "Cache LLM responses",
                    "Hash(prompt + context) keys; TTL 24h; 70-90% hit rate expected; \
                     significant cost savings.",
                ]),
                row(&[
                    "Workflow",
                    "n8n on AWS EC2",
                    "Webhook + Maestro + tools",
                    "Store secrets in n8n Credentials; watch execution metrics.",
                ]),
                row(&[
                    "Operational DB",
                    "PostgreSQL (AWS RDS)",
                    "Source of truth",
                    "Parameterized SQL; indexes on filter fields; separate from EC2.",
                ]),
                vec![
                    Cell::text("Cache"),
                    Cell::text("Redis (AWS ElastiCache)"),
                    Cell::text("L1 cache"),
                    Cell::new(vec![
                        text("Keys "),
                        code("ns:resource:hash(params)"),
                        text(", TTL+jitter, stampede protection."),
                    ]),
                ],
                row(&[
                    "Vector Store",
                    "Supabase (pgvector)",
                    "RAG / history recall",
                    "Async embeddings; tenant-scoped collections.",
                ]),
                row(&[
                    "ATS",
                    "Unified.to",
                    "Data ingestion",
                    "Batch + retry/backoff; idempotent upsert; invalidate Redis.",
                ]),
                vec![
                    Cell::text("Hosting"),
                    Cell::text("AWS (EC2, RDS, ElastiCache)"),
                    Cell::text("Separation & scaling"),
                    Cell::new(vec![
                        text("Security groups, IAM, backups. Redis and Postgres run "),
                        strong("outside"),
                        text(" the EC2 that hosts n8n."),
                    ]),
                ],
            ],
        )],
    }
}

// ---------------------------------------------------------------------------
// 4) Architecture Overview
// ---------------------------------------------------------------------------

fn architecture_overview() -> Section {
    Section {
        anchor: "architecture-overview".to_string(),
        title: "Architecture Overview".to_string(),
        toc_label: None,
        blocks: vec![Block::paragraph(vec![
            text(
                "Frontend (Next.js) handles sign-up and ATS connection. n8n exposes a Webhook \
                 which invokes Maestro. Maestro checks ",
            ),
            strong("lmCache"),
            text(" for similar prompts first; on cache miss, calls "),
            strong("AWS Bedrock"),
            text(
                " and caches the response. It extracts filters (date, position, location…) and \
                 calls the ",
            ),
            strong("ATS Context API"),
            text(" tool. The tool queries "),
            strong("Redis"),
            text(" first; on a miss, runs a parameterized SQL query against "),
            strong("Postgres"),
            text(
                ", then sets Redis with TTL+jitter. Every chat session is persisted. The ",
            ),
            strong("ATS DATA MANAGER"),
            text(
                " sync service runs on connect, pre-first-tool-use (debounced), and hourly: it \
                 fetches from Unified.to, normalizes payloads, performs idempotent upserts into \
                 Postgres, warms/invalidate Redis keys.",
            ),
        ])],
    }
}

// ---------------------------------------------------------------------------
// 5) Components
// ---------------------------------------------------------------------------

fn components() -> Section {
    Section {
        anchor: "components".to_string(),
        title: "Components".to_string(),
        toc_label: None,
        blocks: vec![Block::table(
            &["Component", "Responsibility", "Notes"],
            vec![
                row(&[
                    "Maestro (LLM)",
                    "Interprets user intent, builds filters, calls tools, composes final reply.",
                    "LLM via Bedrock + lmCache. Keep prompts concise; enforce token guards.",
                ]),
                row(&[
                    "lmCache (LLM Cache)",
                    "Caches LLM responses to reduce API calls and improve latency.",
                    "Redis-based; hash(prompt+context) keys; 24h TTL; invalidate on model updates.",
                ]),
                row(&[
                    "ATS Context API (Tool)",
                    "Validates filters; cache-first read; fallback to Postgres with safe SQL; \
                     returns dataset.",
                    "Allowlist fields/operators; pagination; sorting; date ranges.",
                ]),
                vec![
                    Cell::text("Redis (ElastiCache)"),
                    Cell::text("L1 cache for filtered queries."),
                    Cell::new(vec![
                        text("Stampede protection ("),
                        code("SET NX EX"),
                        text("), TTL+jitter, prefix invalidation on ETL writes."),
                    ]),
                ],
                row(&[
                    "PostgreSQL (RDS)",
                    "Source of truth (ATS entities, sessions, messages, tool_calls).",
                    "Indexes on filterable columns; views for common joins.",
                ]),
                row(&[
                    "Supabase (pgvector)",
                    "Optional embeddings for RAG/history.",
                    "Async pipeline after session save; top-K recall.",
                ]),
                row(&[
                    "ATS DATA MANAGER",
                    "Sync from Unified.to; retry/backoff; normalize; idempotent upsert; \
                     warm/invalidate cache.",
                    "Triggers: on connect; pre-first-tool-use; hourly cron.",
                ]),
                row(&[
                    "n8n (EC2)",
                    "Workflow runtime (Webhook + Maestro + tools + logging).",
                    "Credentials for secrets; per-env config.",
                ]),
            ],
        )],
    }
}

// ---------------------------------------------------------------------------
// 6) Data Model & Flows
// ---------------------------------------------------------------------------

fn data_model_flows() -> Section {
    Section {
        anchor: "data-model-flows".to_string(),
        title: "Data Model & Flows".to_string(),
        toc_label: None,
        blocks: vec![
            Block::heading(3, "Key Entities"),
            Block::bullets(vec![
                vec![
                    strong("candidates"),
                    text("(id, full_name, position, location, status, tags[], updated_at, …)"),
                ],
                vec![
                    strong("jobs"),
                    text("(id, title, department, location, status, updated_at, …)"),
                ],
                vec![
                    strong("companies"),
                    text("(id, name, industry, location, updated_at, …)"),
                ],
                vec![strong("sessions"), text("(id, user_id, created_at, …)")],
                vec![strong("messages"), text("(id, session_id, role, content, ts)")],
                vec![
                    strong("tool_calls"),
                    text("(id, session_id, tool, args_json, latency_ms, ts)"),
                ],
                vec![
                    strong("lmCache (Redis)"),
                    text(": key=hash(prompt+context), value={response, tokens, model, ttl}"),
                ],
            ]),
            Block::heading(3, "Happy-Path Flow"),
            Block::numbered(vec![
                vec![text(
                    "Onboarding sync (ATS connect) → Unified.to → ATS DATA MANAGER → upsert \
                     Postgres → warm/invalidate Redis.",
                )],
                vec![text(
                    "Chat: Webhook → Maestro → lmCache lookup → (miss) AWS Bedrock → cache LLM \
                     response.",
                )],
                vec![text("Maestro: build filters → call ATS Context API.")],
                vec![text(
                    "ATS Context API: Redis lookup → (miss) Postgres query (parameterized) → set \
                     Redis (TTL+jitter) → return rows.",
                )],
                vec![text(
                    "Maestro: summarize/rank/compose → respond; Save Session → optional \
                     embeddings (Supabase).",
                )],
            ]),
        ],
    }
}

// ---------------------------------------------------------------------------
// 7) Security, Privacy & Compliance
// ---------------------------------------------------------------------------

fn security_privacy_compliance() -> Section {
    Section {
        anchor: "security-privacy-compliance".to_string(),
        title: "Security, Privacy & Compliance".to_string(),
        toc_label: None,
        blocks: vec![Block::bullets(vec![
            vec![
                text("Secrets in "),
                strong("n8n Credentials"),
                text(", not nodes. IAM least privilege; VPC security groups."),
            ],
            vec![text(
                "PII redaction before logs; opt-in retention; DSAR workflows (GDPR-ready).",
            )],
            vec![text(
                "TLS in transit; at-rest encryption (RDS, ElastiCache, Supabase). Scheduled \
                 backups/snapshots.",
            )],
        ])],
    }
}

// ---------------------------------------------------------------------------
// 8) Observability & SRE
// ---------------------------------------------------------------------------

fn observability_sre() -> Section {
    Section {
        anchor: "observability-sre".to_string(),
        title: "Observability & SRE".to_string(),
        toc_label: None,
        blocks: vec![Block::bullets(vec![
            vec![text(
                "Metrics: ATS cache hit/miss, lmCache hit/miss, DB latency, token usage, \
                 Unified.to error rates.",
            )],
            vec![text(
                "Traces: tool calls (args, latency), LLM cache lookups, SQL timings, sync job \
                 steps.",
            )],
            vec![text(
                "Alerts: sync failures, cache stampedes, lmCache hit rate drops, high p95 \
                 latency, token spend spikes.",
            )],
        ])],
    }
}

// ---------------------------------------------------------------------------
// 9) Deployment & Environments
// ---------------------------------------------------------------------------

fn deployment_environments() -> Section {
    Section {
        anchor: "deployment-environments".to_string(),
        title: "Deployment & Environments".to_string(),
        toc_label: None,
        blocks: vec![Block::paragraph(vec![
            text("Environments: "),
            strong("dev"),
            text(", "),
            strong("staging"),
            text(", "),
            strong("prod"),
            text(
                ". n8n on AWS EC2 (ARM m7g for cost). Datastores managed: RDS Postgres, \
                 ElastiCache Redis. LLM via AWS Bedrock. Vector store via Supabase (pgvector). \
                 IaC with Terraform/CFN.",
            ),
        ])],
    }
}

// ---------------------------------------------------------------------------
// 10) Sizing & Pricing
// ---------------------------------------------------------------------------

fn sizing_pricing() -> Section {
    Section {
        anchor: "sizing-pricing".to_string(),
        title: "Sizing & Pricing (Monthly, rough)".to_string(),
        toc_label: Some("Sizing & Pricing (Monthly)".to_string()),
        blocks: vec![
            Block::heading(3, "Fixed/standing costs"),
            Block::table_with_footer(
                &["Service", "Unit Price", "Monthly (~730h)"],
                vec![
                    vec![
                        Cell::text("EC2 for n8n (m7g.large)"),
                        Cell::text("$0.0816/hr"),
                        Cell::strong("$59.57"),
                    ],
                    vec![
                        Cell::text("RDS PostgreSQL (db.t4g.medium)"),
                        Cell::text("$0.0740/hr"),
                        Cell::strong("$54.02"),
                    ],
                    vec![
                        Cell::text("ElastiCache Redis (cache.t4g.small)"),
                        Cell::text("$0.0320/hr"),
                        Cell::strong("$23.36"),
                    ],
                    vec![
                        Cell::text("Supabase Vector Store (Pro)"),
                        Cell::text("$25 flat"),
                        Cell::strong("$25.00"),
                    ],
                    vec![
                        Cell::text("Unified.to (starter ref)"),
                        Cell::text("$350 flat"),
                        Cell::strong("$350.00"),
                    ],
                ],
                vec![
                    Cell::text("Subtotal (fixed)").spanning(2),
                    Cell::strong("$511.95"),
                ],
            ),
            Block::heading(3, "LLM usage (Bedrock example — Claude-class model)"),
            Block::small(vec![
                text("Assumptions per conversation: "),
                strong("6 turns"),
                text(
                    " × (300 input + 150 output tokens) = 1,800 input / 900 output tokens per \
                     conversation.",
                ),
                Inline::Break,
                text("Pricing reference: "),
                strong("$0.003 / 1K input"),
                text(", "),
                strong("$0.015 / 1K output"),
                text("."),
                Inline::Break,
                strong("lmCache impact:"),
                text(" Expected 70-80% cache hit rate reduces actual LLM API calls by ~75%."),
            ]),
            Block::table(
                &[
                    "Conversations / month",
                    "Input tokens",
                    "Output tokens",
                    "Without lmCache",
                    "With lmCache (75% savings)",
                ],
                vec![
                    vec![
                        Cell::text("1,000"),
                        Cell::text("1,800,000"),
                        Cell::text("900,000"),
                        Cell::strong("$18.90"),
                        Cell::strong("$4.73"),
                    ],
                    vec![
                        Cell::text("5,000"),
                        Cell::text("9,000,000"),
                        Cell::text("4,500,000"),
                        Cell::strong("$94.50"),
                        Cell::strong("$23.63"),
                    ],
                    vec![
                        Cell::text("20,000"),
                        Cell::text("36,000,000"),
                        Cell::text("18,000,000"),
                        Cell::strong("$378.00"),
                        Cell::strong("$94.50"),
                    ],
                ],
            ),
            Block::heading(3, "Embeddings (optional)"),
            Block::small(vec![
                text(
                    "Assume 50k messages/month × 300 tokens → 15,000,000 tokens → at $0.0001 / \
                     1K ≈ ",
                ),
                strong("$1.50"),
                text("/mo."),
            ]),
            Block::note(vec![Block::paragraph(vec![
                strong("Notes:"),
                text(
                    " Costs vary by region, model, and traffic. For production, consider \
                     Reserved/Save-Plan discounts for EC2/RDS/ElastiCache.",
                ),
            ])]),
        ],
    }
}

// ---------------------------------------------------------------------------
// 11) Effort & Timeline
// ---------------------------------------------------------------------------

fn effort_timeline() -> Section {
    Section {
        anchor: "effort-timeline".to_string(),
        title: "Effort & Timeline (person-days)".to_string(),
        toc_label: Some("Effort & Timeline".to_string()),
        blocks: vec![
            Block::table_with_footer(
                &["Workstream", "Baseline"],
                vec![
                    row(&[
                        "ATS DATA MANAGER (ETL: Unified.to integration, batching, \
                         retry/backoff, normalization, upsert, cache warm/invalidations)",
                        "7",
                    ]),
                    row(&[
                        "ATS Context API Tool (JS/SQL filters, Redis-first, Postgres fallback)",
                        "4",
                    ]),
                    row(&["Maestro prompts & filter extraction logic", "3"]),
                    row(&[
                        "Data model & Save Session (sessions, messages, tool traces)",
                        "3",
                    ]),
                    row(&[
                        "Vector Store integration (Supabase pgvector, embeddings pipeline)",
                        "3",
                    ]),
                    row(&[
                        "Frontend onboarding (Sign Up, Connect ATS, Sync status)",
                        "5",
                    ]),
                    row(&["Observability (logging, metrics, alerts, dashboards)", "3"]),
                    row(&["Security & compliance (secrets, PII masking, retention)", "3"]),
                    row(&[
                        "Infra & IaC (EC2, RDS, ElastiCache, networking, backups)",
                        "5",
                    ]),
                    row(&[
                        "QA & load testing (happy paths, failure modes, cache tests)",
                        "3",
                    ]),
                    row(&["Documentation & runbooks", "2"]),
                ],
                vec![Cell::text("Total"), Cell::text("41.0")],
            ),
            Block::small(vec![text(
                "Assumes one squad (BE, FE/Full-stack, shared DevOps). Parallelize ETL and FE. \
                 Includes unit/integration tests and staging hardening.",
            )]),
        ],
    }
}

// ---------------------------------------------------------------------------
// 12) Risks & Mitigations
// ---------------------------------------------------------------------------

fn risks_mitigations() -> Section {
    Section {
        anchor: "risks-mitigations".to_string(),
        title: "Risks & Mitigations".to_string(),
        toc_label: None,
        blocks: vec![Block::bullets(vec![
            vec![text(
                "LLM spend spikes → token guards, prompt compression, shorter outputs, cache \
                 reuse.",
            )],
            vec![
                text("Cache stampedes → "),
                code("SET NX EX"),
                text(", jitter, background revalidation."),
            ],
            vec![text(
                "Unified.to rate limits → tuned batch size, exponential backoff, incremental \
                 checkpoints.",
            )],
            vec![text(
                "Postgres index regressions → slow query alerts, auto-analyze/vacuum, plan \
                 checks in CI.",
            )],
            vec![text(
                "Secret leakage → n8n Credentials/IAM rotation, no secrets in logs, scoped \
                 roles.",
            )],
        ])],
    }
}

// ---------------------------------------------------------------------------
// 13) Testing Strategy
// ---------------------------------------------------------------------------

fn testing_strategy() -> Section {
    Section {
        anchor: "testing-strategy".to_string(),
        title: "Testing Strategy".to_string(),
        toc_label: None,
        blocks: vec![Block::bullets(vec![
            vec![text(
                "Unit tests for filters/SQL builders; contract tests for Unified.to payloads.",
            )],
            vec![text(
                "Load tests on ATS Context API; chaos tests (Redis/RDS outage).",
            )],
            vec![text(
                "Canary stage for sync jobs; synthetic chats for Maestro.",
            )],
        ])],
    }
}

// ---------------------------------------------------------------------------
// 14) Rollout Plan
// ---------------------------------------------------------------------------

fn rollout_plan() -> Section {
    Section {
        anchor: "rollout-plan".to_string(),
        title: "Rollout Plan".to_string(),
        toc_label: None,
        blocks: vec![Block::numbered(vec![
            vec![text("Phase 1: Internal users, limited ATS scope.")],
            vec![text("Phase 2: Beta customers, hourly sync, dashboards live.")],
            vec![text(
                "Phase 3: GA with SLA (99.9%), reserved capacity, blue/green for n8n upgrades.",
            )],
        ])],
    }
}

// ---------------------------------------------------------------------------
// 15) Maintenance & Runbooks
// ---------------------------------------------------------------------------

fn maintenance_runbooks() -> Section {
    Section {
        anchor: "maintenance-runbooks".to_string(),
        title: "Maintenance & Runbooks".to_string(),
        toc_label: None,
        blocks: vec![Block::bullets(vec![
            vec![text(
                "Runbooks: sync failure recovery; Redis invalidation; RDS failover; credential \
                 rotation; rate-limit handling.",
            )],
            vec![text("Weekly on-call; SLO budgets; monthly cost review.")],
        ])],
    }
}

// ---------------------------------------------------------------------------
// 16) Glossary
// ---------------------------------------------------------------------------

fn glossary() -> Section {
    Section {
        anchor: "glossary".to_string(),
        title: "Glossary".to_string(),
        toc_label: None,
        blocks: vec![Block::bullets(vec![
            vec![
                strong("L1 cache"),
                text(": fast, short-lived Redis cache for filtered results."),
            ],
            vec![
                strong("RAG"),
                text(": retrieval-augmented generation using Supabase pgvector."),
            ],
            vec![
                strong("Idempotent upsert"),
                text(": write that safely handles duplicates via stable IDs."),
            ],
        ])],
    }
}

// ---------------------------------------------------------------------------
// 17) Architecture Diagram
// ---------------------------------------------------------------------------

fn architecture_diagram() -> Section {
    Section {
        anchor: "architecture-diagram".to_string(),
        title: "Architecture Diagram".to_string(),
        toc_label: None,
        blocks: vec![
            Block::paragraph(vec![text(
                "The following diagram illustrates the complete system architecture, showing \
                 the flow from user interaction through the various components including the \
                 frontend, Maestro orchestrator, caching layers, and sync processes.",
            )]),
            Block::note(vec![
                Block::paragraph(vec![
                    strong("📐 Editable Diagram Source:"),
                    text(
                        " The original architecture diagram is available as a Draw.io file: ",
                    ),
                    code("n8n_arch_with_deploy_and_corner_table.drawio"),
                ]),
                Block::paragraph(vec![
                    strong("How to edit:"),
                    text(" Open the .drawio file in "),
                    Inline::link("diagrams.net (Draw.io)", "https://app.diagrams.net/"),
                    text(
                        " to modify the architecture diagram, add new components, or update the \
                         visual flow.",
                    ),
                ]),
                Block::small(vec![text(
                    "The diagram below is a text-based representation of the Draw.io source for \
                     easy reading and navigation within this documentation.",
                )]),
            ]),
            Block::figure(
                Some("System Architecture Flow"),
                &[
                    "🚀 User Journey:",
                    "App Startup → Next.js Frontend (Sign Up & Connect ATS) → Initial Sync \
                     (15s-5min)",
                    "",
                    "💬 Chat Request Flow:",
                    "Frontend → Webhook Ingestion → Maestro Agent → ATS Context API Tool",
                    "├─ Maestro → lmCache (check for cached LLM response)",
                    "├─ Maestro ↔ AWS Bedrock (on cache miss) → lmCache (store response)",
                    "├─ ATS Tool → Redis Cache (L1 lookup)",
                    "├─ ATS Tool → PostgreSQL (fallback query)",
                    "└─ PostgreSQL → Redis (set cache with TTL)",
                    "",
                    "💾 Data Persistence:",
                    "Maestro → Save Session (Postgres) → Supabase Vector Store (async embeddings)",
                    "",
                    "🔄 Background Sync:",
                    "External Connectors (Unified.to/ATS APIs) → ATS DATA MANAGER",
                    "├─ Fetch with batching + retry/backoff",
                    "├─ Normalize & validate payloads",
                    "├─ Idempotent upsert → PostgreSQL",
                    "├─ Warm Redis cache (popular queries)",
                    "└─ Invalidate affected keys on updates",
                    "",
                    "📊 Cross-Cutting Concerns:",
                    "🔍 Logging & Monitoring (tool calls, cache metrics, latency alerts)",
                    "🔒 Security & Governance (n8n Credentials, PII masking, retention)",
                ],
            ),
            Block::heading(3, "Component Interactions"),
            Block::table(
                &["From", "To", "Interaction", "Type"],
                vec![
                    row(&["Frontend", "Webhook", "Chat request", "HTTP POST"]),
                    row(&[
                        "Maestro",
                        "lmCache",
                        "Check cached LLM response",
                        "Cache lookup first",
                    ]),
                    row(&["Maestro", "AWS Bedrock", "LLM prompts", "On cache miss"]),
                    row(&["AWS Bedrock", "lmCache", "Store LLM response", "Cache write"]),
                    row(&["ATS Tool", "Redis", "Cache lookup first", "Primary"]),
                    row(&["ATS Tool", "PostgreSQL", "Fallback query", "On cache miss"]),
                    row(&["Sync Manager", "PostgreSQL", "Idempotent upsert", "Batch writes"]),
                    row(&["Sync Manager", "Redis", "Warm & invalidate", "Cache management"]),
                ],
            ),
            Block::small(vec![
                strong("Key Flow:"),
                text(
                    " User interaction → Frontend → Webhook → Maestro → ATS Context API → \
                     Cache/DB layers. The ATS DATA MANAGER synchronizes external data and \
                     maintains cache consistency.",
                ),
            ]),
        ],
    }
}

// ---------------------------------------------------------------------------
// 18) API Specifications
// ---------------------------------------------------------------------------

fn api_specifications() -> Section {
    Section {
        anchor: "api-specifications".to_string(),
        title: "API Specifications".to_string(),
        toc_label: None,
        blocks: vec![
            Block::heading(3, "Core API Endpoints"),
            Block::table(
                &[
                    "Endpoint",
                    "Method",
                    "Purpose",
                    "Request Schema",
                    "Response Schema",
                ],
                vec![
                    vec![
                        Cell::new(vec![code("/webhook/chat")]),
                        Cell::text("POST"),
                        Cell::text("Process user chat messages"),
                        Cell::new(vec![code("{\"user_id\", \"message\", \"session_id?\"}")]),
                        Cell::new(vec![code(
                            "{\"response\", \"session_id\", \"tool_calls[]\"}",
                        )]),
                    ],
                    vec![
                        Cell::new(vec![code("/api/ats-context")]),
                        Cell::text("POST"),
                        Cell::text("Query ATS data with filters"),
                        Cell::new(vec![code(
                            "{\"filters\": {}, \"pagination\": {}, \"sort\": {}}",
                        )]),
                        Cell::new(vec![code(
                            "{\"data[]\", \"total\", \"cached\", \"query_ms\"}",
                        )]),
                    ],
                    vec![
                        Cell::new(vec![code("/admin/sync")]),
                        Cell::text("POST"),
                        Cell::text("Trigger manual ATS sync"),
                        Cell::new(vec![code("{\"tenant_id\", \"full_sync\": boolean}")]),
                        Cell::new(vec![code(
                            "{\"job_id\", \"status\", \"estimated_duration\"}",
                        )]),
                    ],
                    vec![
                        Cell::new(vec![code("/health")]),
                        Cell::text("GET"),
                        Cell::text("System health check"),
                        Cell::text("-"),
                        Cell::new(vec![code("{\"status\", \"services\": {}, \"version\"}")]),
                    ],
                ],
            ),
            Block::heading(3, "ATS Context API Filter Schema"),
            Block::figure(
                None,
                &[
                    "Supported Filter Operations:",
                    "• eq (equals), ne (not equals)",
                    "• in (in array), nin (not in array)",
                    "• gt, gte, lt, lte (comparisons)",
                    "• like (pattern matching), ilike (case-insensitive)",
                    "• between (range queries for dates/numbers)",
                    "",
                    "Example Filter:",
                    "{",
                    "  \"position\": {\"like\": \"%engineer%\"},",
                    "  \"location\": {\"in\": [\"NYC\", \"SF\", \"Remote\"]},",
                    "  \"updated_at\": {\"gte\": \"2024-01-01\"},",
                    "  \"status\": {\"eq\": \"active\"},",
                    "  \"salary_range\": {\"between\": [80000, 150000]}",
                    "}",
                ],
            ),
            Block::heading(3, "Error Response Format"),
            Block::figure(
                None,
                &[
                    "{",
                    "  \"error\": {",
                    "    \"code\": \"INVALID_FILTER\",",
                    "    \"message\": \"Unsupported operator 'regex' for field 'position'\",",
                    "    \"details\": {",
                    "      \"field\": \"position\",",
                    "      \"operator\": \"regex\",",
                    "      \"allowed_operators\": [\"eq\", \"like\", \"ilike\"]",
                    "    },",
                    "    \"request_id\": \"req_123456789\"",
                    "  }",
                    "}",
                ],
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// 19) Performance Requirements
// ---------------------------------------------------------------------------

fn performance_requirements() -> Section {
    Section {
        anchor: "performance-requirements".to_string(),
        title: "Performance Requirements".to_string(),
        toc_label: None,
        blocks: vec![
            Block::heading(3, "Service Level Objectives (SLOs)"),
            Block::table(
                &[
                    "Metric",
                    "Target (P95)",
                    "Target (P99)",
                    "Error Budget",
                    "Measurement",
                ],
                vec![
                    row(&[
                        "Chat Response Latency",
                        "< 3s",
                        "< 8s",
                        "99.5% availability",
                        "End-to-end response time",
                    ]),
                    row(&[
                        "ATS Context API",
                        "< 500ms",
                        "< 1s",
                        "99.9% availability",
                        "Cache hit: <50ms, DB query: <500ms",
                    ]),
                    row(&[
                        "ATS Cache Hit Rate",
                        "> 80%",
                        "> 85%",
                        "N/A",
                        "Redis hits / total requests",
                    ]),
                    row(&[
                        "LLM Cache Hit Rate (lmCache)",
                        "> 70%",
                        "> 80%",
                        "N/A",
                        "Cached LLM responses / total LLM requests",
                    ]),
                    row(&[
                        "Sync Job Success",
                        "> 95%",
                        "> 98%",
                        "Max 2 failures/day",
                        "Successful syncs / total attempts",
                    ]),
                    row(&[
                        "Token Cost Efficiency",
                        "< $0.05/conversation",
                        "< $0.10/conversation",
                        "N/A",
                        "Monthly token spend / conversations",
                    ]),
                ],
            ),
            Block::heading(3, "Scaling Triggers & Capacity Planning"),
            Block::table(
                &[
                    "Component",
                    "Scale-Out Trigger",
                    "Scale-Up Strategy",
                    "Max Capacity",
                ],
                vec![
                    row(&[
                        "n8n EC2",
                        "CPU > 70% for 5min",
                        "Upgrade to m7g.xlarge",
                        "m7g.2xlarge (8 vCPU)",
                    ]),
                    row(&[
                        "Redis Cache",
                        "Memory > 80%",
                        "cache.t4g.medium → large",
                        "cache.r7g.xlarge (26GB)",
                    ]),
                    row(&[
                        "PostgreSQL RDS",
                        "Connections > 80 or CPU > 80%",
                        "db.t4g.large → xlarge",
                        "db.r6g.xlarge + read replicas",
                    ]),
                    row(&[
                        "LLM API",
                        "Rate limit warnings",
                        "Request queuing + circuit breaker",
                        "AWS Bedrock auto-scales",
                    ]),
                ],
            ),
            Block::heading(3, "Growth Projections"),
            Block::bullets(vec![
                vec![
                    strong("Month 1-3:"),
                    text(" 100-500 conversations/day, single-tenant focus"),
                ],
                vec![
                    strong("Month 4-6:"),
                    text(" 1K-5K conversations/day, 5-10 enterprise customers"),
                ],
                vec![
                    strong("Month 7-12:"),
                    text(" 10K-50K conversations/day, multi-tenant scaling"),
                ],
                vec![
                    strong("Year 2+:"),
                    text(" 100K+ conversations/day, geographic distribution"),
                ],
            ]),
            Block::small(vec![
                strong("Capacity Planning:"),
                text(
                    " Current architecture supports up to 50K conversations/day before \
                     requiring horizontal scaling (multiple n8n instances, connection pooling).",
                ),
            ]),
        ],
    }
}

// ---------------------------------------------------------------------------
// 20) Disaster Recovery
// ---------------------------------------------------------------------------

fn disaster_recovery() -> Section {
    Section {
        anchor: "disaster-recovery".to_string(),
        title: "Disaster Recovery".to_string(),
        toc_label: None,
        blocks: vec![
            Block::heading(3, "Backup Strategy"),
            Block::table(
                &[
                    "Component",
                    "Backup Frequency",
                    "Retention",
                    "Recovery Method",
                    "RTO Target",
                ],
                vec![
                    row(&[
                        "PostgreSQL RDS",
                        "Continuous + Daily snapshots",
                        "35 days",
                        "Point-in-time restore",
                        "< 1 hour",
                    ]),
                    row(&[
                        "Redis ElastiCache",
                        "Daily snapshots",
                        "7 days",
                        "Cluster restore + cache warm",
                        "< 30 minutes",
                    ]),
                    row(&[
                        "n8n Workflows",
                        "Git commits + weekly export",
                        "Indefinite (Git)",
                        "Import workflows + credentials",
                        "< 15 minutes",
                    ]),
                    row(&[
                        "Supabase Vector Store",
                        "Daily automated backups",
                        "30 days",
                        "Database restore",
                        "< 2 hours",
                    ]),
                ],
            ),
            Block::heading(3, "Failure Scenarios & Response"),
            Block::figure(
                None,
                &[
                    "🔴 Critical Failures (RTO < 1 hour):",
                    "• EC2 instance failure → Auto-restart + health check alerts",
                    "• RDS primary failure → Automated failover to standby (Multi-AZ)",
                    "• Redis cluster failure → Restore from snapshot, accept cache-miss \
                     performance",
                    "",
                    "🟡 Degraded Performance (RTO < 4 hours):",
                    "• AWS Bedrock throttling → Circuit breaker, queue requests, notify users",
                    "• Unified.to API down → Pause sync jobs, serve cached data, manual \
                     intervention",
                    "• High latency (>5s) → Scale resources, investigate bottlenecks",
                    "",
                    "🟢 Operational Issues (RTO < 24 hours):",
                    "• Supabase outage → Disable RAG features, normal operation continues",
                    "• Cost spike alerts → Review usage, implement emergency limits",
                    "• Data inconsistency → Run reconciliation scripts, manual data fixes",
                ],
            ),
            Block::heading(3, "Recovery Procedures"),
            Block::figure(
                Some("RDS Failover Runbook"),
                &[
                    "1. Monitor RDS failover in AWS Console",
                    "2. Update DNS/connection strings if needed",
                    "3. Verify application connectivity (health check)",
                    "4. Clear Redis cache to prevent stale reads",
                    "5. Monitor query performance for 2 hours",
                    "6. Document incident timeline",
                ],
            ),
            Block::figure(
                Some("Complete System Recovery"),
                &[
                    "1. Deploy fresh EC2 + install n8n",
                    "2. Restore PostgreSQL from latest snapshot",
                    "3. Create new Redis cluster (accept empty cache)",
                    "4. Import n8n workflows from Git backup",
                    "5. Re-configure secrets and credentials",
                    "6. Test webhook endpoint + sample chat",
                    "7. Trigger full ATS sync job",
                    "8. Monitor system for 24 hours",
                ],
            ),
            Block::heading(3, "Business Continuity"),
            Block::paragraph(vec![
                strong("Maximum Tolerable Downtime:"),
                text(" 4 hours (business hours), 12 hours (off-hours)"),
            ]),
            Block::paragraph(vec![
                strong("Data Loss Tolerance:"),
                text(" Max 1 hour of conversations (RDS point-in-time recovery)"),
            ]),
            Block::paragraph(vec![
                strong("Communication Plan:"),
                text(" Slack alerts → Engineering → Customer Success → Status page updates"),
            ]),
            Block::note(vec![Block::paragraph(vec![
                strong("Note:"),
                text(
                    " During outages, frontend should display \"System temporarily \
                     unavailable\" with ETA updates. Critical enterprise customers have \
                     dedicated Slack channels for real-time updates.",
                ),
            ])]),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::Block;

    #[test]
    fn document_is_deterministic() {
        assert_eq!(document(), document());
    }

    #[test]
    fn has_twenty_sections_in_order() {
        let doc = document();
        assert_eq!(doc.sections.len(), 20);
        assert_eq!(doc.sections[0].anchor, "executive-summary");
        assert_eq!(doc.sections[9].anchor, "sizing-pricing");
        assert_eq!(doc.sections[19].anchor, "disaster-recovery");
    }

    #[test]
    fn anchors_are_valid_and_unique() {
        document().validate().unwrap();
    }

    #[test]
    fn toc_entries_resolve_to_sections() {
        let doc = document();
        for entry in doc.toc() {
            let section = doc.section(&entry.anchor).expect("toc anchor must resolve");
            assert_eq!(doc.section_number(&section.anchor), Some(entry.number));
        }
    }

    #[test]
    fn toc_abbreviates_sizing_pricing() {
        let doc = document();
        let entry = &doc.toc()[9];
        assert_eq!(entry.label, "Sizing & Pricing (Monthly)");
        assert_eq!(
            doc.section("sizing-pricing").unwrap().title,
            "Sizing & Pricing (Monthly, rough)"
        );
    }

    #[test]
    fn fixed_cost_subtotal_spans_two_columns() {
        let doc = document();
        let section = doc.section("sizing-pricing").unwrap();
        let footer = section
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { footer, .. } if !footer.is_empty() => Some(footer),
                _ => None,
            })
            .expect("fixed cost table has a subtotal footer");
        assert_eq!(footer[0].span, 2);
        assert_eq!(footer.len(), 2);
    }

    #[test]
    fn effort_table_totals_to_41() {
        let doc = document();
        let section = doc.section("effort-timeline").unwrap();
        let (rows, footer) = section
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { rows, footer, .. } => Some((rows, footer)),
                _ => None,
            })
            .unwrap();
        assert_eq!(rows.len(), 11);
        let total: f64 = rows
            .iter()
            .map(|r| match &r[1].content[0] {
                crate::doc::Inline::Text { text } => text.parse::<f64>().unwrap(),
                _ => panic!("baseline cell must be plain text"),
            })
            .sum();
        assert_eq!(total, 41.0);
        assert!(matches!(
            &footer[1].content[0],
            crate::doc::Inline::Text { text } if text == "41.0"
        ));
    }

    #[test]
    fn rendered_page_contains_every_anchor() {
        let doc = document();
        let page = crate::render::html::render_page(&doc);
        for section in &doc.sections {
            assert!(
                page.contains(&format!("id=\"{}\"", section.anchor)),
                "page missing id for {}",
                section.anchor
            );
            assert!(
                page.contains(&format!("href=\"#{}\"", section.anchor)),
                "toc missing link for {}",
                section.anchor
            );
        }
    }

    #[test]
    fn stack_table_has_eight_rows() {
        let doc = document();
        let section = doc.section("stack-deployment").unwrap();
        let rows = section
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { rows, .. } => Some(rows),
                _ => None,
            })
            .unwrap();
        assert_eq!(rows.len(), 8);
    }
}
