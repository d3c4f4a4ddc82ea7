pub mod p900_compliance_job;
